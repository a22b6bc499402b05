//! Factory for creating matcher instances
//!
//! This module builds the configured set of matchers from a `LinkerConfig`,
//! validating the configuration on the way.

use super::traits::Matcher;
use super::{EmailMatcher, HashtagMatcher, MentionMatcher, PhoneMatcher, UrlMatcher};
use crate::config::LinkerConfig;
use crate::entity::{HashtagService, MentionService};
use crate::error::Result;

/// Factory for creating matcher instances
pub struct MatcherFactory;

impl MatcherFactory {
    /// Build every enabled matcher, in url, email, phone, mention, hashtag order
    ///
    /// Fails fast on invalid configuration: a URL matcher with no enabled
    /// form, or an unknown mention or hashtag service.
    pub fn from_config(config: &LinkerConfig) -> Result<Vec<Box<dyn Matcher>>> {
        let mut matchers: Vec<Box<dyn Matcher>> = Vec::new();

        if config.urls.enabled {
            matchers.push(Box::new(UrlMatcher::new(config.urls)?));
        }
        if config.email {
            matchers.push(Box::new(EmailMatcher::new()));
        }
        if config.phone {
            matchers.push(Box::new(PhoneMatcher::new()));
        }
        if let Some(service) = &config.mention {
            let service: MentionService = service.parse()?;
            matchers.push(Box::new(MentionMatcher::new(service)));
        }
        if let Some(service) = &config.hashtag {
            let service: HashtagService = service.parse()?;
            matchers.push(Box::new(HashtagMatcher::new(service)));
        }

        log::debug!(
            "configured matchers: [{}]",
            matchers
                .iter()
                .map(|m| m.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(matchers)
    }
}

//! Autolinker - ties matchers, collector, replacer and tag builder together

use crate::anchor::AnchorTagBuilder;
use crate::config::LinkerConfig;
use crate::entity::formatter::replace;
use crate::entity::parser;
use crate::entity::{Match, Matches};
use crate::error::Result;
use crate::matcher::{Matcher, MatcherFactory};
use std::fmt;

/// What the replace hook wants done with a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Render the match with the anchor tag builder
    Default,
    /// Leave the matched text as it is
    Skip,
    /// Insert this string instead of the matched text
    Custom(String),
}

/// Replace hook invoked for every match during [`Autolinker::link`]
pub type ReplaceFn = Box<dyn Fn(&Match, &AnchorTagBuilder) -> Replacement + Send + Sync>;

/// Finds and links URLs, emails, phone numbers, mentions and hashtags in HTML
pub struct Autolinker {
    matchers: Vec<Box<dyn Matcher>>,
    tag_builder: AnchorTagBuilder,
    replace_fn: Option<ReplaceFn>,
}

impl Autolinker {
    /// Build a linker, validating the configuration
    pub fn new(config: &LinkerConfig) -> Result<Self> {
        config.validate_class_name()?;
        let matchers = MatcherFactory::from_config(config)?;

        Ok(Autolinker {
            matchers,
            tag_builder: AnchorTagBuilder::from_config(config),
            replace_fn: None,
        })
    }

    /// Install a hook that decides how each match is replaced
    pub fn with_replace_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Match, &AnchorTagBuilder) -> Replacement + Send + Sync + 'static,
    {
        self.replace_fn = Some(Box::new(f));
        self
    }

    pub fn matchers(&self) -> &[Box<dyn Matcher>] {
        &self.matchers
    }

    pub fn tag_builder(&self) -> &AnchorTagBuilder {
        &self.tag_builder
    }

    /// Find all matches in an HTML document, sorted and non-overlapping
    pub fn parse(&self, input: &str) -> Matches {
        let matches = parser::parse_text(&self.matchers, input);
        log::debug!("found {} matches in {} bytes", matches.len(), input.len());
        matches
    }

    /// Find all matches treating the whole input as text
    pub fn parse_plain(&self, input: &str) -> Matches {
        parser::parse_plain(&self.matchers, input)
    }

    /// Link every match in `input`
    pub fn link(&self, input: &str) -> String {
        let matches = self.parse(input);
        replace(input, &matches.matches, |m| {
            let replacement = match &self.replace_fn {
                Some(f) => f(m, &self.tag_builder),
                None => Replacement::Default,
            };
            match replacement {
                Replacement::Default => Some(self.tag_builder.build(m)),
                Replacement::Skip => {
                    log::trace!("replace hook skipped {} at {}", m.match_type(), m.offset());
                    None
                }
                Replacement::Custom(text) => Some(text),
            }
        })
    }

    /// Replace every match with `transform(match)`, keeping the text on `None`
    pub fn link_with<F>(&self, input: &str, transform: F) -> String
    where
        F: FnMut(&Match) -> Option<String>,
    {
        let matches = self.parse(input);
        replace(input, &matches.matches, transform)
    }
}

impl fmt::Debug for Autolinker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autolinker")
            .field(
                "matchers",
                &self.matchers.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .field("tag_builder", &self.tag_builder)
            .field("replace_fn", &self.replace_fn.is_some())
            .finish()
    }
}

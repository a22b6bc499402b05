//! Hashtag matcher (`#tag`)

use super::traits::Matcher;
use crate::entity::{HashtagService, Match, MatchKind, MatchType};
use crate::html::TextNode;
use crate::regex::{HASHTAG_RE, char_before, is_word_char};

/// Longest hashtag accepted, in characters
pub const MAX_HASHTAG_LEN: usize = 139;

#[derive(Debug, Clone)]
pub struct HashtagMatcher {
    service: HashtagService,
}

impl HashtagMatcher {
    pub fn new(service: HashtagService) -> Self {
        HashtagMatcher { service }
    }

    pub fn service(&self) -> HashtagService {
        self.service
    }
}

impl Matcher for HashtagMatcher {
    fn name(&self) -> &str {
        "hashtag"
    }

    fn match_type(&self) -> MatchType {
        MatchType::Hashtag
    }

    fn parse_matches(&self, node: &TextNode<'_>) -> Vec<Match> {
        let text = node.text;
        HASHTAG_RE
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let tag = caps.name("tag")?.as_str();

                // `&` covers numeric character references such as `&#8217;`
                if char_before(text, whole.start())
                    .is_some_and(|c| is_word_char(c) || c == '&' || c == '#')
                {
                    return None;
                }
                if tag.chars().count() > MAX_HASHTAG_LEN {
                    return None;
                }

                Some(Match::new(
                    node.offset + whole.start(),
                    whole.as_str(),
                    MatchKind::Hashtag {
                        service: self.service,
                        tag: tag.to_string(),
                    },
                ))
            })
            .collect()
    }
}

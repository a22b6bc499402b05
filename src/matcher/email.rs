//! Email address matcher

use super::traits::Matcher;
use crate::entity::{Match, MatchKind, MatchType};
use crate::html::TextNode;
use crate::regex::{EMAIL_RE, char_at, char_before, has_known_tld, is_word_char};

const MAILTO: &str = "mailto:";

#[derive(Debug, Clone, Default)]
pub struct EmailMatcher;

impl EmailMatcher {
    pub fn new() -> Self {
        EmailMatcher
    }

    /// Start of a `mailto:` prefix directly before `start`, if any
    fn mailto_start(text: &str, start: usize) -> Option<usize> {
        let prefix_start = start.checked_sub(MAILTO.len())?;
        text.get(prefix_start..start)
            .filter(|p| p.eq_ignore_ascii_case(MAILTO))
            .map(|_| prefix_start)
    }
}

impl Matcher for EmailMatcher {
    fn name(&self) -> &str {
        "email"
    }

    fn match_type(&self) -> MatchType {
        MatchType::Email
    }

    fn parse_matches(&self, node: &TextNode<'_>) -> Vec<Match> {
        let text = node.text;
        let mut matches = Vec::new();

        for caps in EMAIL_RE.captures_iter(text) {
            let (Some(whole), Some(domain)) = (caps.get(0), caps.name("domain")) else {
                continue;
            };
            let (start, end) = (whole.start(), whole.end());

            // Inside a mention or a longer token
            if char_before(text, start).is_some_and(|c| c == '@' || is_word_char(c)) {
                continue;
            }
            if char_at(text, end).is_some_and(|c| c == '@' || c == '-' || is_word_char(c)) {
                continue;
            }
            if !has_known_tld(domain.as_str()) {
                log::trace!("rejected email {:?}: unknown tld", whole.as_str());
                continue;
            }

            let match_start = Self::mailto_start(text, start).unwrap_or(start);
            matches.push(Match::new(
                node.offset + match_start,
                &text[match_start..end],
                MatchKind::Email {
                    email: whole.as_str().to_string(),
                },
            ));
        }

        matches
    }
}

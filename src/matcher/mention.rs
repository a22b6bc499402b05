//! Mention matcher (`@username`)

use super::traits::Matcher;
use crate::entity::{Match, MatchKind, MatchType, MentionService};
use crate::html::TextNode;
use crate::regex::{char_at, char_before, is_word_char};

#[derive(Debug, Clone)]
pub struct MentionMatcher {
    service: MentionService,
}

impl MentionMatcher {
    pub fn new(service: MentionService) -> Self {
        MentionMatcher { service }
    }

    pub fn service(&self) -> MentionService {
        self.service
    }

    /// Username starting right after the `@` at `at`, if it is a whole token
    fn username_at<'t>(&self, text: &'t str, at: usize) -> Option<&'t str> {
        if char_before(text, at).is_some_and(|c| is_word_char(c) || c == '@') {
            return None;
        }

        let from = at + 1;
        let run_len = text[from..]
            .find(|c: char| !self.service.allows(c))
            .unwrap_or(text.len() - from);
        let run = &text[from..from + run_len];

        // The run stops at a character the service does not allow; a word
        // character there means the token is longer than a username.
        if char_at(text, from + run_len).is_some_and(|c| is_word_char(c) || c == '@') {
            return None;
        }

        let username = run.trim_end_matches('.');
        if username.is_empty() || username.len() > self.service.max_len() {
            return None;
        }
        Some(username)
    }
}

impl Matcher for MentionMatcher {
    fn name(&self) -> &str {
        "mention"
    }

    fn match_type(&self) -> MatchType {
        MatchType::Mention
    }

    fn parse_matches(&self, node: &TextNode<'_>) -> Vec<Match> {
        let text = node.text;
        text.match_indices('@')
            .filter_map(|(at, _)| {
                let username = self.username_at(text, at)?;
                Some(Match::new(
                    node.offset + at,
                    &text[at..at + 1 + username.len()],
                    MatchKind::Mention {
                        service: self.service,
                        username: username.to_string(),
                    },
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentions(service: MentionService, text: &str) -> Vec<(String, usize)> {
        MentionMatcher::new(service)
            .parse_str(text)
            .into_iter()
            .map(|m| (m.matched_text().to_string(), m.offset()))
            .collect()
    }

    #[test]
    fn test_twitter_mentions() {
        assert_eq!(
            mentions(MentionService::Twitter, "@rustlang and @ferris_crab!"),
            vec![("@rustlang".to_string(), 0), ("@ferris_crab".to_string(), 14)]
        );
    }

    #[test]
    fn test_not_inside_email() {
        assert!(mentions(MentionService::Twitter, "joe@example.com").is_empty());
    }

    #[test]
    fn test_too_long_rejected() {
        assert!(mentions(MentionService::Twitter, "@abcdefghijklmnopq").is_empty());
        assert_eq!(
            mentions(MentionService::Instagram, "@abcdefghijklmnopq").len(),
            1
        );
    }

    #[test]
    fn test_service_character_classes() {
        assert_eq!(
            mentions(MentionService::Instagram, "hi @some.user."),
            vec![("@some.user".to_string(), 3)]
        );
        assert_eq!(
            mentions(MentionService::Twitter, "hi @some.user"),
            vec![("@some".to_string(), 3)]
        );
        assert_eq!(
            mentions(MentionService::Soundcloud, "(@dj-name)"),
            vec![("@dj-name".to_string(), 1)]
        );
    }

    #[test]
    fn test_followed_by_non_service_word_char() {
        assert!(mentions(MentionService::Twitter, "@josé").is_empty());
    }

    #[test]
    fn test_payload() {
        let found = MentionMatcher::new(MentionService::Tiktok).parse_str("@crab");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].normalized(), "crab");
        assert_eq!(
            found[0].css_class_suffixes(),
            vec!["mention".to_string(), "mention-tiktok".to_string()]
        );
    }

    #[test]
    fn test_non_matches() {
        assert!(mentions(MentionService::Twitter, "").is_empty());
        assert!(mentions(MentionService::Twitter, "@").is_empty());
        assert!(mentions(MentionService::Twitter, "@ alone").is_empty());
        assert!(mentions(MentionService::Twitter, "@@double").is_empty());
    }
}

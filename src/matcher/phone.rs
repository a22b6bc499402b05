//! Phone number matcher
//!
//! The match keeps the literal text (with its punctuation) for placement,
//! while the payload carries the bare digit string used for `tel:` links.

use super::traits::Matcher;
use crate::entity::{Match, MatchKind, MatchType};
use crate::html::TextNode;
use crate::regex::{PHONE_RE, char_at, char_before, is_word_char};

#[derive(Debug, Clone, Default)]
pub struct PhoneMatcher;

impl PhoneMatcher {
    pub fn new() -> Self {
        PhoneMatcher
    }

    /// Validates the literal number text (without extension)
    ///
    /// # Rules
    /// - Contains at least one separator, so a bare digit run is not a phone number
    /// - A lone `.` is a decimal point, not a separator (`3.1415926535`)
    /// - Parentheses are balanced
    pub fn validate(number_text: &str) -> bool {
        let mut separators = number_text.chars().filter(|c| !c.is_ascii_digit());
        let first = separators.next();
        let decimal = first == Some('.') && separators.next().is_none();
        let opens = number_text.matches('(').count();
        let closes = number_text.matches(')').count();
        first.is_some() && !decimal && opens == closes
    }

    /// Strip everything but digits
    pub fn normalize(number_text: &str) -> String {
        number_text.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl Matcher for PhoneMatcher {
    fn name(&self) -> &str {
        "phone"
    }

    fn match_type(&self) -> MatchType {
        MatchType::Phone
    }

    fn parse_matches(&self, node: &TextNode<'_>) -> Vec<Match> {
        let text = node.text;
        let mut matches = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let Some(caps) = PHONE_RE.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let (start, end) = (whole.start(), whole.end());
            let ext = caps.name("ext");
            let number_text = &text[start..ext.map_or(end, |e| e.start())];

            let bounded = !char_before(text, start).is_some_and(is_word_char)
                && !char_at(text, end).is_some_and(is_word_char);

            if !bounded || !Self::validate(number_text) {
                // Retry one character later: an unbalanced leading paren may
                // hide a valid number right behind it.
                pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
                continue;
            }

            let extension = ext
                .map(|e| Self::normalize(e.as_str()))
                .filter(|digits| !digits.is_empty());

            matches.push(Match::new(
                node.offset + start,
                whole.as_str(),
                MatchKind::Phone {
                    number: Self::normalize(number_text),
                    plus_sign: number_text.starts_with('+'),
                    extension,
                },
            ));
            pos = end;
        }

        matches
    }
}

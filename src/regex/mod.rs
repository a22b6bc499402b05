//! Regular expressions for locating linkable entities
//!
//! This module provides pre-compiled regular expressions used by the matchers.
//! The expressions only find candidates; boundary rules that need look-behind
//! or bracket balancing are applied by the matchers themselves.

pub mod tld;

pub use tld::{has_known_tld, is_known_tld};

use once_cell::sync::Lazy;
use regex::Regex;

/// One domain label: letters/digits, inner hyphens allowed
const LABEL: &str = r"[\p{L}\p{N}](?:[\p{L}\p{N}\-]*[\p{L}\p{N}])?";

/// Alphabetic top-level domain shape
const TLD_SHAPE: &str = r"\p{L}{2,63}";

/// Characters allowed in an email local part besides letters and digits
const LOCAL_PART_CHARS: &str = r"!\#$%\&'*+/=?^_`{|}\~\-";

/// Head of a URL: scheme + optional userinfo + host, `www.` + domain, or a
/// bare domain, each with an optional port
pub static URL_HEAD_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r#"(?i)(?P<scheme>(?:https?|ftp)://)(?:[^\s@/?#<>"]+@)?{label}(?:\.{label})*(?::\d{{1,5}})?|(?P<www>www\.){label}(?:\.{label})*\.{tld}(?::\d{{1,5}})?|(?P<bare>(?:{label}\.)+{tld})(?::\d{{1,5}})?"#,
        label = LABEL,
        tld = TLD_SHAPE,
    );
    Regex::new(&pattern).expect("Failed to compile URL regex")
});

/// Email address: local part, `@`, domain ending in a TLD-shaped label
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"[\p{{L}}\p{{N}}{chars}]+(?:\.[\p{{L}}\p{{N}}{chars}]+)*@(?P<domain>(?:{label}\.)+{tld})",
        chars = LOCAL_PART_CHARS,
        label = LABEL,
        tld = TLD_SHAPE,
    );
    Regex::new(&pattern).expect("Failed to compile email regex")
});

/// Phone number: NANP-shaped numbers with optional country code, or
/// `+`-prefixed international numbers, followed by an optional extension
pub static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:(?:\+?\d{1,3}[\-. ]?)?\(?\d{3}\)?[\-. ]?\d{3}[\-. ]?\d{4}|\+\d{1,3}(?:[\-. ]?\d){7,12})(?P<ext>\s*(?i:ext\.?|x)\s*\d{1,6}|(?:[,;]+\d+\#?)+)?"
    )
    .expect("Failed to compile phone regex")
});

/// Hashtag: `#` followed by letters, marks, digits or underscores
pub static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\#(?P<tag>[\p{L}\p{M}\p{N}_]+)").expect("Failed to compile hashtag regex")
});

/// Word character test shared by the boundary rules
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Character immediately before byte offset `at`
pub fn char_before(text: &str, at: usize) -> Option<char> {
    text.get(..at).and_then(|s| s.chars().next_back())
}

/// Character starting at byte offset `at`
pub fn char_at(text: &str, at: usize) -> Option<char> {
    text.get(at..).and_then(|s| s.chars().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_head_regex() {
        let m = URL_HEAD_RE.captures("see https://example.com:8080/x").unwrap();
        assert!(m.name("scheme").is_some());
        assert_eq!(m.get(0).unwrap().as_str(), "https://example.com:8080");

        let m = URL_HEAD_RE.captures("ftp://user:pw@files.example.com/").unwrap();
        assert_eq!(
            m.get(0).unwrap().as_str(),
            "ftp://user:pw@files.example.com"
        );

        let m = URL_HEAD_RE.captures("WWW.Example.org").unwrap();
        assert!(m.name("www").is_some());

        let m = URL_HEAD_RE.captures("visit sub.example.co.uk now").unwrap();
        assert_eq!(m.name("bare").unwrap().as_str(), "sub.example.co.uk");
    }

    #[test]
    fn test_email_regex() {
        let m = EMAIL_RE.captures("mail joe.smith+tag@mail.example.com!").unwrap();
        assert_eq!(m.get(0).unwrap().as_str(), "joe.smith+tag@mail.example.com");
        assert_eq!(m.name("domain").unwrap().as_str(), "mail.example.com");
    }

    #[test]
    fn test_phone_regex() {
        let found: Vec<_> = PHONE_RE
            .find_iter("Talk to (123) 456-7890 or +1 234.567.8901")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["(123) 456-7890", "+1 234.567.8901"]);

        let m = PHONE_RE.captures("555-123-4567 ext. 42").unwrap();
        assert_eq!(m.name("ext").unwrap().as_str(), " ext. 42");
    }

    #[test]
    fn test_hashtag_regex() {
        let m = HASHTAG_RE.captures("love #rust_lang!").unwrap();
        assert_eq!(m.name("tag").unwrap().as_str(), "rust_lang");
    }

    #[test]
    fn test_char_helpers() {
        assert_eq!(char_before("aé@", 3), Some('é'));
        assert_eq!(char_before("abc", 0), None);
        assert_eq!(char_at("aé", 1), Some('é'));
        assert_eq!(char_at("a", 1), None);
        assert!(is_word_char('_'));
        assert!(!is_word_char('@'));
    }
}

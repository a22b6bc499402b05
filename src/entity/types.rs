//! Match types and structures

use crate::error::AutolinkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Match type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Web URL (scheme, www or bare domain)
    Url,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Social-media mention (`@user`)
    Mention,
    /// Hashtag (`#tag`)
    Hashtag,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Url => "url",
            MatchType::Email => "email",
            MatchType::Phone => "phone",
            MatchType::Mention => "mention",
            MatchType::Hashtag => "hashtag",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service whose username rules and profile URLs apply to mentions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionService {
    Twitter,
    Instagram,
    Soundcloud,
    Tiktok,
}

impl MentionService {
    pub fn as_str(&self) -> &'static str {
        match self {
            MentionService::Twitter => "twitter",
            MentionService::Instagram => "instagram",
            MentionService::Soundcloud => "soundcloud",
            MentionService::Tiktok => "tiktok",
        }
    }

    /// Maximum username length accepted by the service
    pub fn max_len(&self) -> usize {
        match self {
            MentionService::Twitter => 15,
            MentionService::Instagram => 30,
            MentionService::Soundcloud => 50,
            MentionService::Tiktok => 23,
        }
    }

    /// Whether `c` may appear in a username on this service
    pub fn allows(&self, c: char) -> bool {
        if c.is_ascii_alphanumeric() || c == '_' {
            return true;
        }
        match self {
            MentionService::Twitter => false,
            MentionService::Instagram | MentionService::Tiktok => c == '.',
            MentionService::Soundcloud => c == '-',
        }
    }

    /// Profile URL for `username`
    pub fn profile_url(&self, username: &str) -> String {
        match self {
            MentionService::Twitter => format!("https://twitter.com/{}", username),
            MentionService::Instagram => format!("https://instagram.com/{}", username),
            MentionService::Soundcloud => format!("https://soundcloud.com/{}", username),
            MentionService::Tiktok => format!("https://www.tiktok.com/@{}", username),
        }
    }
}

impl FromStr for MentionService {
    type Err = AutolinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(MentionService::Twitter),
            "instagram" => Ok(MentionService::Instagram),
            "soundcloud" => Ok(MentionService::Soundcloud),
            "tiktok" => Ok(MentionService::Tiktok),
            _ => Err(AutolinkError::invalid_service("mention", s)),
        }
    }
}

/// Service whose hashtag pages the links point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashtagService {
    Twitter,
    Facebook,
    Instagram,
    Tiktok,
}

impl HashtagService {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashtagService::Twitter => "twitter",
            HashtagService::Facebook => "facebook",
            HashtagService::Instagram => "instagram",
            HashtagService::Tiktok => "tiktok",
        }
    }

    /// Tag page URL for `tag` (without the leading `#`)
    pub fn tag_url(&self, tag: &str) -> String {
        match self {
            HashtagService::Twitter => format!("https://twitter.com/hashtag/{}", tag),
            HashtagService::Facebook => format!("https://www.facebook.com/hashtag/{}", tag),
            HashtagService::Instagram => format!("https://instagram.com/explore/tags/{}", tag),
            HashtagService::Tiktok => format!("https://www.tiktok.com/tag/{}", tag),
        }
    }
}

impl FromStr for HashtagService {
    type Err = AutolinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twitter" => Ok(HashtagService::Twitter),
            "facebook" => Ok(HashtagService::Facebook),
            "instagram" => Ok(HashtagService::Instagram),
            "tiktok" => Ok(HashtagService::Tiktok),
            _ => Err(AutolinkError::invalid_service("hashtag", s)),
        }
    }
}

/// Which lexical form a URL match was recognized by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlMatchType {
    /// `http://`, `https://` or `ftp://` prefixed
    Scheme,
    /// `www.` prefixed
    Www,
    /// Bare domain ending in a known TLD
    Tld,
}

/// Type-specific payload of a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKind {
    Url {
        url_match_type: UrlMatchType,
    },
    Email {
        /// Address without any `mailto:` prefix
        email: String,
    },
    Phone {
        /// Digits of the number proper, country code included
        number: String,
        plus_sign: bool,
        extension: Option<String>,
    },
    Mention {
        service: MentionService,
        username: String,
    },
    Hashtag {
        service: HashtagService,
        tag: String,
    },
}

/// A linkable entity located in the input
///
/// Offsets are UTF-8 byte offsets into the full input document, so
/// `&input[m.offset()..m.end_offset()] == m.matched_text()` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    offset: usize,
    matched_text: String,
    kind: MatchKind,
}

impl Match {
    /// Create a match at its global offset
    pub fn new(offset: usize, matched_text: impl Into<String>, kind: MatchKind) -> Self {
        let matched_text = matched_text.into();
        debug_assert!(!matched_text.is_empty(), "matches are never empty");
        Match {
            offset,
            matched_text,
            kind,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Exclusive end offset
    pub fn end_offset(&self) -> usize {
        self.offset + self.matched_text.len()
    }

    pub fn matched_text(&self) -> &str {
        &self.matched_text
    }

    pub fn kind(&self) -> &MatchKind {
        &self.kind
    }

    pub fn match_type(&self) -> MatchType {
        match self.kind {
            MatchKind::Url { .. } => MatchType::Url,
            MatchKind::Email { .. } => MatchType::Email,
            MatchKind::Phone { .. } => MatchType::Phone,
            MatchKind::Mention { .. } => MatchType::Mention,
            MatchKind::Hashtag { .. } => MatchType::Hashtag,
        }
    }

    /// Normalized value: URL with scheme, bare email address, phone digits,
    /// mention username or hashtag text
    pub fn normalized(&self) -> String {
        match &self.kind {
            MatchKind::Url { url_match_type } => match url_match_type {
                UrlMatchType::Scheme => self.matched_text.clone(),
                UrlMatchType::Www | UrlMatchType::Tld => format!("http://{}", self.matched_text),
            },
            MatchKind::Email { email } => email.clone(),
            MatchKind::Phone { number, .. } => number.clone(),
            MatchKind::Mention { username, .. } => username.clone(),
            MatchKind::Hashtag { tag, .. } => tag.clone(),
        }
    }

    /// CSS class labels for styling hooks
    pub fn css_class_suffixes(&self) -> Vec<String> {
        match &self.kind {
            MatchKind::Mention { service, .. } => {
                vec!["mention".to_string(), format!("mention-{}", service.as_str())]
            }
            _ => vec![self.match_type().as_str().to_string()],
        }
    }

    /// Return the same match placed `base` bytes further into the document
    pub fn shifted(self, base: usize) -> Self {
        Match {
            offset: self.offset + base,
            ..self
        }
    }

    /// Check if the spans of two matches intersect
    pub fn overlaps(&self, other: &Match) -> bool {
        self.offset < other.end_offset() && other.offset < self.end_offset()
    }
}

/// Collection of matches located in one document
#[derive(Debug, Clone, Default)]
pub struct Matches {
    pub matches: Vec<Match>,
}

impl Matches {
    /// Create an empty collection
    pub fn new() -> Self {
        Matches {
            matches: Vec::new(),
        }
    }

    /// Add a match to the collection
    pub fn push(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Add every match from an iterator
    pub fn extend<I: IntoIterator<Item = Match>>(&mut self, iter: I) {
        self.matches.extend(iter);
    }

    /// Sort by offset, longer match first on ties
    ///
    /// The sort is stable, so equal spans keep their insertion order.
    pub fn sort_by_position(&mut self) {
        self.matches.sort_by(|a, b| {
            a.offset
                .cmp(&b.offset)
                .then_with(|| b.matched_text.len().cmp(&a.matched_text.len()))
        });
    }

    /// Remove overlapping matches
    ///
    /// After sorting, a single sweep keeps a match only when it starts at or
    /// after the end of the last kept one.
    pub fn remove_overlaps(&mut self) {
        self.sort_by_position();

        let mut accepted_end = 0;
        let before = self.matches.len();
        self.matches.retain(|m| {
            if m.offset < accepted_end {
                log::trace!(
                    "dropping {} match {:?} at {}: overlaps previous match ending at {}",
                    m.match_type(),
                    m.matched_text,
                    m.offset,
                    accepted_end
                );
                false
            } else {
                accepted_end = m.end_offset();
                true
            }
        });

        if before != self.matches.len() {
            log::debug!(
                "overlap resolution kept {} of {} matches",
                self.matches.len(),
                before
            );
        }
    }

    /// Check the sorted, non-overlapping invariant
    pub fn is_resolved(&self) -> bool {
        self.matches
            .windows(2)
            .all(|w| w[0].end_offset() <= w[1].offset)
    }

    /// Get all matches of one type
    pub fn of_type(&self, match_type: MatchType) -> Vec<&Match> {
        self.matches
            .iter()
            .filter(|m| m.match_type() == match_type)
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Count of all matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Check if collection is empty
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn into_vec(self) -> Vec<Match> {
        self.matches
    }
}

impl IntoIterator for Matches {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(offset: usize, text: &str) -> Match {
        Match::new(
            offset,
            text,
            MatchKind::Url {
                url_match_type: UrlMatchType::Tld,
            },
        )
    }

    fn phone(offset: usize, text: &str, number: &str) -> Match {
        Match::new(
            offset,
            text,
            MatchKind::Phone {
                number: number.to_string(),
                plus_sign: false,
                extension: None,
            },
        )
    }

    #[test]
    fn test_match_creation() {
        let m = phone(8, "(123) 456-7890", "1234567890");
        assert_eq!(m.match_type(), MatchType::Phone);
        assert_eq!(m.offset(), 8);
        assert_eq!(m.end_offset(), 22);
        assert_eq!(m.normalized(), "1234567890");
        assert_eq!(m.css_class_suffixes(), vec!["phone".to_string()]);
    }

    #[test]
    fn test_mention_css_suffixes() {
        let m = Match::new(
            0,
            "@rust",
            MatchKind::Mention {
                service: MentionService::Twitter,
                username: "rust".to_string(),
            },
        );
        assert_eq!(
            m.css_class_suffixes(),
            vec!["mention".to_string(), "mention-twitter".to_string()]
        );
    }

    #[test]
    fn test_url_normalized() {
        assert_eq!(url(0, "example.com").normalized(), "http://example.com");
        let m = Match::new(
            0,
            "https://example.com",
            MatchKind::Url {
                url_match_type: UrlMatchType::Scheme,
            },
        );
        assert_eq!(m.normalized(), "https://example.com");
    }

    #[test]
    fn test_shifted() {
        let m = url(3, "example.com").shifted(10);
        assert_eq!(m.offset(), 13);
        assert_eq!(m.end_offset(), 24);
    }

    #[test]
    fn test_sort_longer_first_on_ties() {
        let mut matches = Matches::new();
        matches.push(phone(10, "1234567", "1234567"));
        matches.push(url(10, "1234567.example.com"));
        matches.push(url(0, "a.io"));

        matches.sort_by_position();

        assert_eq!(matches.matches[0].matched_text(), "a.io");
        assert_eq!(matches.matches[1].matched_text(), "1234567.example.com");
        assert_eq!(matches.matches[2].matched_text(), "1234567");
    }

    #[test]
    fn test_remove_overlaps() {
        let mut matches = Matches::new();
        matches.push(phone(17, "456-7890", "4567890"));
        matches.push(url(0, "example.com/call/456-7890"));
        matches.push(url(30, "other.org"));

        matches.remove_overlaps();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches.matches[0].matched_text(), "example.com/call/456-7890");
        assert_eq!(matches.matches[1].matched_text(), "other.org");
        assert!(matches.is_resolved());
    }

    #[test]
    fn test_adjacent_matches_both_kept() {
        let mut matches = Matches::new();
        matches.push(url(0, "a.io"));
        matches.push(url(4, "b.io"));

        matches.remove_overlaps();

        assert_eq!(matches.len(), 2);
        assert!(matches.is_resolved());
    }

    #[test]
    fn test_service_from_str() {
        assert_eq!(
            "Twitter".parse::<MentionService>().unwrap(),
            MentionService::Twitter
        );
        assert_eq!(
            "facebook".parse::<HashtagService>().unwrap(),
            HashtagService::Facebook
        );
        assert!("myspace".parse::<MentionService>().is_err());
        assert!("".parse::<HashtagService>().is_err());
    }

    #[test]
    fn test_mention_service_rules() {
        assert!(MentionService::Instagram.allows('.'));
        assert!(!MentionService::Twitter.allows('.'));
        assert!(MentionService::Soundcloud.allows('-'));
        assert_eq!(
            MentionService::Tiktok.profile_url("rust"),
            "https://www.tiktok.com/@rust"
        );
    }
}

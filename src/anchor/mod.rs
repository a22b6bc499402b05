//! Anchor tag builder
//!
//! Turns a finalized match into `<a>` markup. All attribute assembly and
//! escaping happens here; the matchers and the collector never produce
//! markup themselves.

use crate::config::LinkerConfig;
use crate::entity::formatter::css_classes;
use crate::entity::{Match, MatchKind, UrlMatchType};
use once_cell::sync::Lazy;
use regex::Regex;

/// Character reference at the start of a string (`&amp;`, `&#39;`, `&#x27;`)
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);")
        .expect("Failed to compile entity regex")
});

/// Escape text for use in HTML content or a double-quoted attribute
///
/// Ampersands that already start a character reference are kept as-is, since
/// the input text is itself HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '&' if ENTITY_RE.is_match(&text[i..]) => escaped.push('&'),
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Builds anchor tags for matches
#[derive(Debug, Clone, Default)]
pub struct AnchorTagBuilder {
    pub new_window: bool,
    pub strip_prefix: bool,
    pub strip_trailing_slash: bool,
    pub class_name: String,
}

impl AnchorTagBuilder {
    pub fn from_config(config: &LinkerConfig) -> Self {
        AnchorTagBuilder {
            new_window: config.new_window,
            strip_prefix: config.strip_prefix,
            strip_trailing_slash: config.strip_trailing_slash,
            class_name: config.class_name.clone(),
        }
    }

    /// Link target for a match
    pub fn href(&self, m: &Match) -> String {
        match m.kind() {
            MatchKind::Url { .. } => m.normalized(),
            MatchKind::Email { email } => format!("mailto:{}", email),
            MatchKind::Phone {
                number,
                plus_sign,
                extension,
            } => {
                let mut href = format!("tel:{}{}", if *plus_sign { "+" } else { "" }, number);
                if let Some(ext) = extension {
                    href.push_str(";ext=");
                    href.push_str(ext);
                }
                href
            }
            MatchKind::Mention { service, username } => service.profile_url(username),
            MatchKind::Hashtag { service, tag } => service.tag_url(tag),
        }
    }

    /// Visible text of the anchor, before escaping
    pub fn anchor_text(&self, m: &Match) -> String {
        let MatchKind::Url { url_match_type } = m.kind() else {
            return m.matched_text().to_string();
        };

        let mut text = m.matched_text();
        if self.strip_prefix {
            if *url_match_type == UrlMatchType::Scheme {
                if let Some(i) = text.find("://") {
                    text = &text[i + 3..];
                }
            }
            if text.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("www.")) {
                text = &text[4..];
            }
        }
        if self.strip_trailing_slash {
            if let Some(stripped) = text.strip_suffix('/') {
                text = stripped;
            }
        }
        text.to_string()
    }

    /// Build the complete anchor tag for a match
    pub fn build(&self, m: &Match) -> String {
        let mut tag = format!("<a href=\"{}\"", escape_html(&self.href(m)));

        let classes = css_classes(m, &self.class_name);
        if !classes.is_empty() {
            tag.push_str(&format!(" class=\"{}\"", escape_html(&classes.join(" "))));
        }
        if self.new_window {
            tag.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
        }

        tag.push('>');
        tag.push_str(&escape_html(&self.anchor_text(m)));
        tag.push_str("</a>");
        tag
    }
}

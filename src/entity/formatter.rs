//! Match formatter - rebuilds text around matches and formats them for output

use crate::entity::types::Match;
use serde::{Deserialize, Serialize};

#[cfg(feature = "colored-output")]
use colored::Colorize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Input with anchor tags inserted
    #[default]
    Html,
    /// JSON list of matches
    Json,
    /// Input with matches marked inline (colored if feature enabled)
    Highlight,
}

/// Rebuild `input` with every match replaced by `transform(match)`
///
/// `matches` must be sorted and non-overlapping. A transform returning
/// `None` leaves the match's text untouched. Text outside the matched
/// spans is copied verbatim.
pub fn replace<F>(input: &str, matches: &[Match], mut transform: F) -> String
where
    F: FnMut(&Match) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());
    let mut cursor = 0;

    for m in matches {
        let Some(gap) = input.get(cursor..m.offset()) else {
            log::warn!(
                "skipping {} match at {}: not in order or outside input",
                m.match_type(),
                m.offset()
            );
            continue;
        };
        if input.get(m.offset()..m.end_offset()) != Some(m.matched_text()) {
            log::warn!(
                "skipping {} match at {}: text does not match input",
                m.match_type(),
                m.offset()
            );
            continue;
        }

        result.push_str(gap);
        match transform(m) {
            Some(replacement) => result.push_str(&replacement),
            None => result.push_str(m.matched_text()),
        }
        cursor = m.end_offset();
    }

    result.push_str(&input[cursor..]);
    result
}

/// Format matches as JSON
pub fn format_json(matches: &[Match], class_name: &str) -> Result<String, serde_json::Error> {
    use serde_json::json;

    let items: Vec<_> = matches
        .iter()
        .map(|m| {
            json!({
                "type": m.match_type(),
                "text": m.matched_text(),
                "position": {
                    "start": m.offset(),
                    "end": m.end_offset(),
                },
                "normalized": m.normalized(),
                "classes": css_classes(m, class_name),
            })
        })
        .collect();

    serde_json::to_string_pretty(&json!({
        "matches": items
    }))
}

/// CSS classes for a match under a base class name
///
/// Empty when no base class name is configured.
pub fn css_classes(m: &Match, class_name: &str) -> Vec<String> {
    if class_name.is_empty() {
        return Vec::new();
    }
    std::iter::once(class_name.to_string())
        .chain(
            m.css_class_suffixes()
                .into_iter()
                .map(|suffix| format!("{}-{}", class_name, suffix)),
        )
        .collect()
}

/// Mark every match inline as `[text]`
pub fn format_highlight(input: &str, matches: &[Match], use_color: bool) -> String {
    replace(input, matches, |m| {
        let marked = format!("[{}]", m.matched_text());
        if use_color {
            #[cfg(feature = "colored-output")]
            {
                return Some(highlight_color(m, &marked));
            }
        }
        Some(marked)
    })
}

#[cfg(feature = "colored-output")]
fn highlight_color(m: &Match, marked: &str) -> String {
    use crate::entity::types::MatchType;

    match m.match_type() {
        MatchType::Url => marked.blue().underline().to_string(),
        MatchType::Email => marked.green().to_string(),
        MatchType::Phone => marked.yellow().to_string(),
        MatchType::Mention => marked.cyan().to_string(),
        MatchType::Hashtag => marked.magenta().to_string(),
    }
}

/// Format single match information
pub fn format_match(m: &Match) -> String {
    format!(
        "{} {:?} at {}..{} -> {}",
        m.match_type(),
        m.matched_text(),
        m.offset(),
        m.end_offset(),
        m.normalized()
    )
}

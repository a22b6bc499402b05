//! Trait definitions for the matcher module
//!
//! This module defines the common interface that all matcher implementations must follow.

use crate::entity::{Match, MatchType};
use crate::html::TextNode;

/// Common trait for all matcher implementations
///
/// Matchers hold only their own configuration and are pure functions of
/// their input, so one instance can scan any number of text nodes from any
/// number of threads.
pub trait Matcher: Send + Sync {
    fn name(&self) -> &str;
    fn match_type(&self) -> MatchType;

    /// Find matches in one text node
    ///
    /// Returned matches are ordered by offset and already placed in document
    /// coordinates (`node.offset` is added to every local position).
    fn parse_matches(&self, node: &TextNode<'_>) -> Vec<Match>;

    /// Find matches in a standalone string
    fn parse_str(&self, text: &str) -> Vec<Match> {
        self.parse_matches(&TextNode::new(text, 0))
    }
}

//! Core types and error handling
//!
//! This module re-exports commonly used types and traits for the autolink-rs crate.

pub use crate::anchor::AnchorTagBuilder;
pub use crate::config::LinkerConfig;
pub use crate::entity::{Match, MatchKind, MatchType, Matches};
pub use crate::error::{AutolinkError, Result};
pub use crate::html::TextNode;
pub use crate::linker::{Autolinker, Replacement};
pub use crate::matcher::Matcher;
pub use log::{debug, error, info, warn};

//! Match model, collection and output module
//!
//! This module holds the match data model, the collector that pools and
//! de-overlaps matcher output, and the replacer that rebuilds the input
//! around the surviving matches.

pub mod parser;
pub mod types;
pub mod formatter;

pub use types::*;

//! autolink-rs: find and link URLs, emails, phone numbers, mentions and
//! hashtags in HTML or plain text
//!
//! ```
//! use autolink_rs::{Autolinker, LinkerConfig};
//!
//! let config = LinkerConfig {
//!     new_window: false,
//!     ..LinkerConfig::default()
//! };
//! let linker = Autolinker::new(&config).unwrap();
//! assert_eq!(
//!     linker.link("Visit example.com"),
//!     "Visit <a href=\"http://example.com\">example.com</a>"
//! );
//! ```

pub mod anchor;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod html;
pub mod linker;
pub mod matcher;
pub mod prelude;
pub mod regex;
pub mod utils;

// Re-export common types
pub use anchor::AnchorTagBuilder;
pub use config::{AppConfig, LinkerConfig};
pub use entity::{Match, MatchKind, MatchType, Matches};
pub use error::{AutolinkError, Result};
pub use linker::{Autolinker, Replacement};
pub use matcher::{Matcher, MatcherFactory, UrlOptions};

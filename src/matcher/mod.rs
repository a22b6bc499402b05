//! Matcher module for autolink-rs
//!
//! Each matcher scans a single text node for one kind of linkable entity.
//! All matchers implement the common trait so the linker can run any
//! configured combination of them.
//!
//! # Module Organization
//!
//! - `traits`: Trait definitions (Matcher trait)
//! - `factory`: Builds the configured matcher set from a `LinkerConfig`
//! - Matcher implementations: url, email, phone, mention, hashtag

// Core modules
pub mod traits;
pub mod factory;

// Matcher implementation modules
pub mod email;
pub mod hashtag;
pub mod mention;
pub mod phone;
pub mod url;

// Re-export core traits for convenience
pub use traits::Matcher;
pub use factory::MatcherFactory;

// Re-export matcher implementations
pub use email::EmailMatcher;
pub use hashtag::HashtagMatcher;
pub use mention::MentionMatcher;
pub use phone::PhoneMatcher;
pub use url::{UrlMatcher, UrlOptions};

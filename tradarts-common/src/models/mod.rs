//! Catalog record types
//!
//! Every record is immutable once the catalog is built. Cross-table references
//! (tutorial → instrument, song → instrument name) are plain strings; no
//! referential integrity is enforced.
//!
//! Records serialize with camelCase field names.

mod catalog;
mod community;
mod user;

pub use catalog::{Challenge, ChallengeDifficulty, ChallengeType, Difficulty, Instrument, Song, Tutorial};
pub use community::{Achievement, Author, BlogPost, CommunityPost, Event, Faq};
pub use user::{Preferences, Privacy, ProfileUpdate, Role, User};

/// Error returned when a closed enumeration is parsed from an unknown spelling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

//! # TradArts Common Library
//!
//! Shared code for the TradArts service including:
//! - Catalog record types (instruments, tutorials, songs, challenges, ...)
//! - The static catalog tables
//! - Linear search and filter routines
//! - Event types (TradartsEvent enum) and EventBus
//! - Configuration loading
//! - Utility functions

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod search;
pub mod sse;
pub mod time;

pub use error::{Error, Result};

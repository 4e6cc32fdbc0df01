//! `versetag` - Bible reference detection and verse tagging.
//!
//! Finds references such as `Joh 3,16-18.20` or `Kolosserbrief` in prose,
//! expands them into individual verses and emits one stable tag per verse.

// Re-export public modules for use in integration tests and as a library
pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod services;
pub mod types;
pub mod utils;

pub use config::{Config, Separators};
pub use error::{Error, Result};
pub use services::{Tagger, TagTarget};
pub use types::{BookId, ExpandedReference, Granularity, Language, ParsedReference, SourceSpan};

//! The reference pipeline: masking, scanning, expansion and tag emission.

pub mod expander;
pub mod masker;
pub mod pipeline;
pub mod scanner;
pub mod tags;

pub use expander::{expand, ExpandError};
pub use masker::ContentMasker;
pub use pipeline::Tagger;
pub use scanner::ReferenceScanner;
pub use tags::{TagEmitter, TagTarget};

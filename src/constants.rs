//! Application constants.
//!
//! Centralizes defaults and configuration keys for better maintainability.

/// Tag output constants.
pub mod tags {
    /// Default prefix placed before every emitted tag.
    pub const DEFAULT_PREFIX: &str = "bible/";

    /// Separator between tag segments.
    pub const SEGMENT_SEPARATOR: char = '/';
}

/// Separator defaults per notation convention.
pub mod separators {
    /// German chapter-verse separator (`Joh 3,16`).
    pub const GERMAN_CHAPTER_VERSE: &str = ",";

    /// German verse list separator (`Joh 3,16.18`).
    pub const GERMAN_LIST: &str = ".";

    /// English chapter-verse separator (`John 3:16`).
    pub const ENGLISH_CHAPTER_VERSE: &str = ":";

    /// English verse list separator (`John 3:16,18`).
    pub const ENGLISH_LIST: &str = ",";

    /// Range separator shared by both conventions.
    pub const RANGE: &str = "-";

    /// Typographic dashes always accepted as range separators.
    pub const EXTRA_RANGE_DASHES: &[&str] = &["\u{2013}", "\u{2014}"];
}

/// Environment variable names read by `Config::load`.
pub mod env {
    /// Working language code.
    pub const LANGUAGE: &str = "VERSETAG_LANGUAGE";

    /// Chapter-verse separator.
    pub const CHAPTER_VERSE_SEPARATOR: &str = "VERSETAG_CHAPTER_VERSE_SEPARATOR";

    /// Verse list separator.
    pub const LIST_SEPARATOR: &str = "VERSETAG_LIST_SEPARATOR";

    /// Range separator.
    pub const RANGE_SEPARATOR: &str = "VERSETAG_RANGE_SEPARATOR";

    /// Whether references inside code spans count.
    pub const INCLUDE_CODE: &str = "VERSETAG_INCLUDE_CODE";

    /// Tag prefix.
    pub const TAG_PREFIX: &str = "VERSETAG_TAG_PREFIX";

    /// Whether whole-book references expand to verse tags.
    pub const EXPAND_BOOKS: &str = "VERSETAG_EXPAND_BOOKS";

    /// Path of the customization table.
    pub const CUSTOMIZATIONS: &str = "VERSETAG_CUSTOMIZATIONS";
}

/// File system constants.
pub mod files {
    /// Directory under the platform config dir holding our files.
    pub const CONFIG_DIR: &str = "versetag";

    /// Default customization table file name.
    pub const CUSTOMIZATIONS_FILE: &str = "customizations.json";

    /// Document extensions picked up when walking directories.
    pub const DOCUMENT_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];
}

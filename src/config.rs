//! Application configuration.
//!
//! Handles loading configuration from environment variables, .env files and
//! the persisted customization table.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::bible::Customizations;
use crate::constants;
use crate::error::{Error, Result};
use crate::types::Language;

/// The three separators of the reference grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    /// Between chapter and verse (`,` in `Joh 3,16`).
    pub chapter_verse: String,
    /// Between list items (`.` in `Joh 3,16.18`).
    pub list: String,
    /// Between range ends (`-` in `Joh 3,16-18`).
    pub range: String,
}

impl Separators {
    /// Conventional separators for a language.
    pub fn for_language(language: Language) -> Self {
        use constants::separators::{
            ENGLISH_CHAPTER_VERSE, ENGLISH_LIST, GERMAN_CHAPTER_VERSE, GERMAN_LIST, RANGE,
        };
        let (chapter_verse, list) = match language {
            Language::German => (GERMAN_CHAPTER_VERSE, GERMAN_LIST),
            Language::English => (ENGLISH_CHAPTER_VERSE, ENGLISH_LIST),
        };
        Self {
            chapter_verse: chapter_verse.to_string(),
            list: list.to_string(),
            range: RANGE.to_string(),
        }
    }

    /// Reject separators the grammar cannot tell apart.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("chapter-verse", &self.chapter_verse),
            ("list", &self.list),
            ("range", &self.range),
        ];
        for (name, sep) in named {
            if sep.is_empty() {
                return Err(Error::config(
                    format!("The {name} separator is empty"),
                    "Set a single punctuation character such as ',' ':' '.' or '-'",
                ));
            }
            if sep.chars().any(|c| c.is_ascii_digit() || c.is_whitespace()) {
                return Err(Error::config(
                    format!("The {name} separator {sep:?} contains digits or whitespace"),
                    "Separators must be punctuation",
                ));
            }
        }
        for (i, (a_name, a)) in named.iter().enumerate() {
            for (b_name, b) in named.iter().skip(i + 1) {
                if a == b {
                    return Err(Error::config(
                        format!("The {a_name} and {b_name} separators are both {a:?}"),
                        "Each separator must be distinct",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

/// Configuration for the tagging pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// Working language for book names.
    pub language: Language,
    /// Reference grammar separators.
    pub separators: Separators,
    /// Recognize references inside code spans and fenced code.
    pub include_code: bool,
    /// Prefix placed before every tag.
    pub tag_prefix: String,
    /// Expand whole-book references into one tag per verse.
    pub expand_whole_books: bool,
    /// User additions, removals and pinned spellings.
    pub customizations: Customizations,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

impl Config {
    /// Defaults for a language, with its conventional separators.
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            separators: Separators::for_language(language),
            include_code: false,
            tag_prefix: constants::tags::DEFAULT_PREFIX.to_string(),
            expand_whole_books: false,
            customizations: Customizations::default(),
        }
    }

    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let language = match env::var(constants::env::LANGUAGE) {
            Ok(code) => code.parse()?,
            Err(_) => Language::default(),
        };
        let mut config = Self::for_language(language);

        if let Ok(sep) = env::var(constants::env::CHAPTER_VERSE_SEPARATOR) {
            config.separators.chapter_verse = sep;
        }
        if let Ok(sep) = env::var(constants::env::LIST_SEPARATOR) {
            config.separators.list = sep;
        }
        if let Ok(sep) = env::var(constants::env::RANGE_SEPARATOR) {
            config.separators.range = sep;
        }
        config.separators.validate()?;

        if let Ok(flag) = env::var(constants::env::INCLUDE_CODE) {
            config.include_code = parse_flag(constants::env::INCLUDE_CODE, &flag)?;
        }
        if let Ok(flag) = env::var(constants::env::EXPAND_BOOKS) {
            config.expand_whole_books = parse_flag(constants::env::EXPAND_BOOKS, &flag)?;
        }
        if let Ok(prefix) = env::var(constants::env::TAG_PREFIX) {
            config.tag_prefix = prefix;
        }

        // Customizations: env var override, or the default file when present
        let custom_path = env::var(constants::env::CUSTOMIZATIONS).ok().map_or_else(
            || default_customizations_path().filter(|p| p.is_file()),
            |path| Some(PathBuf::from(shellexpand::tilde(&path).to_string())),
        );
        if let Some(path) = custom_path {
            config.customizations = Customizations::from_path(&path)?;
            tracing::info!("Loaded book customizations from {}", path.display());
        }

        Ok(config)
    }
}

/// Default location of the customization table.
pub fn default_customizations_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| {
        d.join(constants::files::CONFIG_DIR)
            .join(constants::files::CUSTOMIZATIONS_FILE)
    })
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::config(
            format!("{name} has unrecognized value {other:?}"),
            "Use true or false",
        )),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn defaults_are_german() {
        let config = Config::default();
        assert_eq!(config.language, Language::German);
        assert_eq!(config.separators.chapter_verse, ",");
        assert_eq!(config.separators.list, ".");
        assert_eq!(config.separators.range, "-");
        assert_eq!(config.tag_prefix, "bible/");
        assert!(!config.include_code);
        assert!(!config.expand_whole_books);
    }

    #[test]
    fn english_separators() {
        let seps = Separators::for_language(Language::English);
        assert_eq!((seps.chapter_verse.as_str(), seps.list.as_str()), (":", ","));
        assert!(seps.validate().is_ok());
    }

    #[test]
    fn duplicate_separators_are_rejected() {
        let seps = Separators { chapter_verse: ",".into(), list: ",".into(), range: "-".into() };
        assert!(seps.validate().unwrap_err().is_config());
    }

    #[test]
    fn digit_or_empty_separators_are_rejected() {
        let digit = Separators { chapter_verse: "1".into(), ..Separators::default() };
        assert!(digit.validate().is_err());
        let empty = Separators { range: String::new(), ..Separators::default() };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn flags_parse() {
        assert!(parse_flag("X", "Yes").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}

//! Per-language book names, abbreviations and standalone patterns.
//!
//! Each language ships a static table with one row per book in canonical
//! order. The registry pairs every row with its [`BookId`] once, on first
//! use, and is never mutated afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::bible::canon::BOOK_COUNT;
use crate::types::{BookId, Language};

mod de;
mod en;

/// One row of a static language table, in canonical position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawBook {
    display: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    standalone: &'static [&'static str],
}

/// Shorthand used by the language tables.
pub(crate) const fn row(
    display: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    standalone: &'static [&'static str],
) -> RawBook {
    RawBook { display, name, aliases, standalone }
}

/// Localized names for one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookLocalization {
    /// Canonical book.
    pub book: BookId,
    /// Short form emitted in tags (e.g. `Joh`).
    pub display_id: &'static str,
    /// Full display name (e.g. `Johannes`).
    pub name: &'static str,
    /// Spellings a user might type before a chapter number.
    pub aliases: &'static [&'static str],
    /// Phrases that denote the whole book on their own.
    pub standalone: &'static [&'static str],
}

/// All book localizations of one language, in canonical order.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    /// Language of this table.
    pub language: Language,
    /// One entry per book, canonical order.
    pub books: Vec<BookLocalization>,
}

impl LanguageTable {
    fn assemble(language: Language, rows: &'static [RawBook; BOOK_COUNT]) -> Self {
        let books = BookId::all()
            .zip(rows.iter())
            .map(|(book, raw)| BookLocalization {
                book,
                display_id: raw.display,
                name: raw.name,
                aliases: raw.aliases,
                standalone: raw.standalone,
            })
            .collect();
        Self { language, books }
    }

    /// Localization of a single book.
    pub fn get(&self, book: BookId) -> Option<&BookLocalization> {
        self.books.get(book.ordinal() - 1)
    }
}

lazy_static! {
    static ref REGISTRY: HashMap<Language, LanguageTable> = {
        let mut m = HashMap::new();
        m.insert(Language::German, LanguageTable::assemble(Language::German, &de::BOOKS));
        m.insert(Language::English, LanguageTable::assemble(Language::English, &en::BOOKS));
        m
    };
}

/// Base table for a language.
pub fn table(language: Language) -> Option<&'static LanguageTable> {
    REGISTRY.get(&language)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn every_language_is_registered_with_all_books() {
        for &language in Language::all() {
            let table = table(language).unwrap();
            assert_eq!(table.books.len(), BOOK_COUNT, "{language}");
            for (index, loc) in table.books.iter().enumerate() {
                assert_eq!(loc.book.ordinal(), index + 1);
                assert!(!loc.display_id.is_empty());
                assert!(!loc.display_id.contains('/'), "{}", loc.display_id);
                assert!(!loc.aliases.is_empty(), "{language} {}", loc.book);
            }
        }
    }

    #[test]
    fn german_john_uses_joh() {
        let john: BookId = "John".parse().unwrap();
        let loc = table(Language::German).unwrap().get(john).unwrap();
        assert_eq!(loc.display_id, "Joh");
        assert!(loc.aliases.contains(&"Johannes"));
    }

    #[test]
    fn colossians_has_standalone_forms() {
        let col: BookId = "Col".parse().unwrap();
        let de = table(Language::German).unwrap().get(col).unwrap();
        assert!(de.standalone.contains(&"Kolosserbrief"));
        let en = table(Language::English).unwrap().get(col).unwrap();
        assert!(!en.standalone.is_empty());
    }
}

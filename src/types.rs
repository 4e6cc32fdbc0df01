//! Core type definitions for compile-time safety.
//!
//! Book identifiers, languages and the reference records that flow between
//! the scanner, the expander and the tag emitter.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::bible::canon::{CanonicalBook, BOOKS, BOOK_COUNT};

/// Canonical, language-neutral book identifier.
///
/// Wraps the book's ordinal (1-66), so ordering follows canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(u8);

impl BookId {
    /// Look up a book by its 1-based canonical ordinal.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        if (1..=BOOK_COUNT).contains(&ordinal) {
            u8::try_from(ordinal).ok().map(Self)
        } else {
            None
        }
    }

    /// 1-based position in canonical order.
    #[must_use]
    pub fn ordinal(self) -> usize {
        usize::from(self.0)
    }

    /// Canonical identifier string (e.g. `John`, `1Cor`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.canon().id
    }

    /// Static chapter/verse structure of this book.
    #[must_use]
    pub fn canon(self) -> &'static CanonicalBook {
        &BOOKS[self.ordinal() - 1]
    }

    /// Iterate over all books in canonical order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=BOOK_COUNT).filter_map(Self::from_ordinal)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known canonical book identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown book identifier: {0:?}")]
pub struct UnknownBookId(pub String);

impl FromStr for BookId {
    type Err = UnknownBookId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BOOKS
            .iter()
            .position(|book| book.id.eq_ignore_ascii_case(wanted))
            .and_then(|index| Self::from_ordinal(index + 1))
            .ok_or_else(|| UnknownBookId(s.to_string()))
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Supported working languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// German book names and abbreviations.
    #[default]
    #[serde(rename = "de", alias = "german", alias = "deu")]
    German,
    /// English book names and abbreviations.
    #[serde(rename = "en", alias = "english", alias = "eng")]
    English,
}

impl Language {
    /// All supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::German, Self::English]
    }

    /// Short language code (`de`, `en`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::German => "de",
            Self::English => "en",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::German => "Deutsch",
            Self::English => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" | "deu" | "ger" | "german" | "deutsch" => Ok(Self::German),
            "en" | "eng" | "english" => Ok(Self::English),
            other => Err(crate::error::Error::config(
                format!("Unsupported language {other:?}"),
                "Use one of: de, en",
            )),
        }
    }
}

/// How much of a book a reference covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// The whole book.
    Book,
    /// One chapter or a chapter range.
    Chapter,
    /// Specific verses.
    Verse,
}

/// Byte range of a match in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl SourceSpan {
    /// Create a span from byte offsets.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether two spans share at least one byte.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// A recognized reference, not yet expanded into verses.
///
/// With `Granularity::Verse`, `start_chapter` and `start_verse` are always
/// set and `end_chapter` is only set for cross-chapter ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedReference {
    /// Matched source text.
    pub text: String,
    /// Where the match sits in the scanned text.
    pub span: SourceSpan,
    /// Canonical book.
    pub book: BookId,
    /// Book, chapter or verse level.
    pub granularity: Granularity,
    /// First chapter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_chapter: Option<u32>,
    /// Last chapter of a chapter range or cross-chapter verse range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_chapter: Option<u32>,
    /// First verse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_verse: Option<u32>,
    /// Last verse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_verse: Option<u32>,
    /// Explicit verse set for lists that are not one contiguous run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verses: Option<Vec<u32>>,
}

impl ParsedReference {
    /// Whole-book reference.
    pub fn book(book: BookId, text: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            text: text.into(),
            span,
            book,
            granularity: Granularity::Book,
            start_chapter: None,
            end_chapter: None,
            start_verse: None,
            end_verse: None,
            verses: None,
        }
    }

    /// Chapter (or chapter range) reference.
    pub fn chapters(
        book: BookId,
        start: u32,
        end: Option<u32>,
        text: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            start_chapter: Some(start),
            end_chapter: end,
            granularity: Granularity::Chapter,
            ..Self::book(book, text, span)
        }
    }

    /// Verse reference inside one chapter.
    ///
    /// `verses` must be non-empty and ascending; the explicit list is only
    /// kept when it is not a single contiguous run.
    pub fn verses(
        book: BookId,
        chapter: u32,
        verses: &[u32],
        text: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        let first = verses.first().copied();
        let last = verses.last().copied();
        let contiguous = verses.windows(2).all(|pair| pair[1] == pair[0] + 1);
        Self {
            start_chapter: Some(chapter),
            start_verse: first,
            end_verse: last,
            verses: (!contiguous).then(|| verses.to_vec()),
            granularity: Granularity::Verse,
            ..Self::book(book, text, span)
        }
    }

    /// Verse range spanning several chapters.
    pub fn cross_chapter(
        book: BookId,
        (start_chapter, start_verse): (u32, u32),
        (end_chapter, end_verse): (u32, u32),
        text: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            start_chapter: Some(start_chapter),
            end_chapter: Some(end_chapter),
            start_verse: Some(start_verse),
            end_verse: Some(end_verse),
            granularity: Granularity::Verse,
            ..Self::book(book, text, span)
        }
    }
}

/// One concrete, in-bounds verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ExpandedReference {
    /// Canonical book.
    pub book: BookId,
    /// 1-based chapter.
    pub chapter: u32,
    /// 1-based verse.
    pub verse: u32,
}

impl ExpandedReference {
    /// Create a verse triple.
    #[must_use]
    pub const fn new(book: BookId, chapter: u32, verse: u32) -> Self {
        Self { book, chapter, verse }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn book_id_round_trips_through_str() {
        let john: BookId = "John".parse().unwrap();
        assert_eq!(john.ordinal(), 43);
        assert_eq!(john.to_string(), "John");
        assert_eq!("1cor".parse::<BookId>().unwrap().as_str(), "1Cor");
        assert!("Hezekiah".parse::<BookId>().is_err());
    }

    #[test]
    fn book_ids_cover_the_canon_in_order() {
        let all: Vec<_> = BookId::all().collect();
        assert_eq!(all.len(), 66);
        assert_eq!(all[0].as_str(), "Gen");
        assert_eq!(all[65].as_str(), "Rev");
        assert!(BookId::from_ordinal(0).is_none());
        assert!(BookId::from_ordinal(67).is_none());
    }

    #[test]
    fn language_parsing() {
        assert_eq!("DE".parse::<Language>().unwrap(), Language::German);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn span_overlap_is_strict() {
        let a = SourceSpan::new(0, 5);
        assert!(a.overlaps(&SourceSpan::new(4, 8)));
        assert!(!a.overlaps(&SourceSpan::new(5, 8)));
        assert!(!SourceSpan::new(5, 8).overlaps(&a));
    }

    #[test]
    fn verse_list_keeps_explicit_set_only_when_gapped() {
        let john: BookId = "John".parse().unwrap();
        let span = SourceSpan::new(0, 1);
        let run = ParsedReference::verses(john, 3, &[16, 17, 18], "x", span);
        assert_eq!(run.verses, None);
        assert_eq!((run.start_verse, run.end_verse), (Some(16), Some(18)));

        let gapped = ParsedReference::verses(john, 3, &[16, 18], "x", span);
        assert_eq!(gapped.verses, Some(vec![16, 18]));
    }
}

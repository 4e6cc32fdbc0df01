//! Range expander.
//!
//! Turns a parsed reference into the concrete verses it covers, clamped to
//! the canonical structure. Out-of-range chapters and verses are dropped
//! rather than reported; only structurally incomplete references fail.

use thiserror::Error;

use crate::bible::{max_chapter, max_verse};
use crate::types::{BookId, ExpandedReference, Granularity, ParsedReference};

/// A reference that cannot be expanded at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// Chapter-level reference without a start chapter.
    #[error("{book}: chapter reference without a chapter")]
    MissingChapter {
        /// Book of the reference.
        book: BookId,
    },

    /// Verse-level reference without a start verse.
    #[error("{book}: verse reference without a verse")]
    MissingVerse {
        /// Book of the reference.
        book: BookId,
    },

    /// End of a range before its start.
    #[error("{book}: range ends before it starts")]
    InvertedRange {
        /// Book of the reference.
        book: BookId,
    },
}

/// Every verse of one chapter, or nothing if the chapter does not exist.
fn whole_chapter(book: BookId, chapter: u32) -> impl Iterator<Item = ExpandedReference> {
    let last = max_verse(book, chapter).unwrap_or(0);
    (1..=last).map(move |verse| ExpandedReference::new(book, chapter, verse))
}

/// Verses of a chapter within `first..=last`, clamped to the chapter.
fn verse_run(
    book: BookId,
    chapter: u32,
    first: u32,
    last: u32,
) -> impl Iterator<Item = ExpandedReference> {
    let max = max_verse(book, chapter).unwrap_or(0);
    (first.max(1)..=last.min(max)).map(move |verse| ExpandedReference::new(book, chapter, verse))
}

/// Expand a reference into its in-bounds verses, in canonical order.
pub fn expand(reference: &ParsedReference) -> Result<Vec<ExpandedReference>, ExpandError> {
    let book = reference.book;
    match reference.granularity {
        Granularity::Book => Ok((1..=max_chapter(book))
            .flat_map(|chapter| whole_chapter(book, chapter))
            .collect()),

        Granularity::Chapter => {
            let start = reference
                .start_chapter
                .ok_or(ExpandError::MissingChapter { book })?;
            let end = reference.end_chapter.unwrap_or(start);
            if end < start {
                return Err(ExpandError::InvertedRange { book });
            }
            Ok((start..=end.min(max_chapter(book)))
                .flat_map(|chapter| whole_chapter(book, chapter))
                .collect())
        }

        Granularity::Verse => {
            let chapter = reference
                .start_chapter
                .ok_or(ExpandError::MissingChapter { book })?;
            let start_verse = reference
                .start_verse
                .ok_or(ExpandError::MissingVerse { book })?;

            match reference.end_chapter {
                Some(end_chapter) if end_chapter != chapter => {
                    expand_cross_chapter(reference, book, (chapter, start_verse), end_chapter)
                }
                _ => Ok(expand_single_chapter(reference, book, chapter, start_verse)),
            }
        }
    }
}

fn expand_single_chapter(
    reference: &ParsedReference,
    book: BookId,
    chapter: u32,
    start_verse: u32,
) -> Vec<ExpandedReference> {
    if let Some(verses) = &reference.verses {
        return verses
            .iter()
            .filter(|&&verse| crate::bible::contains(book, chapter, verse))
            .map(|&verse| ExpandedReference::new(book, chapter, verse))
            .collect();
    }
    let end_verse = reference.end_verse.unwrap_or(start_verse);
    verse_run(book, chapter, start_verse, end_verse).collect()
}

fn expand_cross_chapter(
    reference: &ParsedReference,
    book: BookId,
    (start_chapter, start_verse): (u32, u32),
    end_chapter: u32,
) -> Result<Vec<ExpandedReference>, ExpandError> {
    if end_chapter < start_chapter {
        return Err(ExpandError::InvertedRange { book });
    }
    let last_chapter = max_chapter(book);
    if start_chapter > last_chapter || end_chapter > last_chapter {
        tracing::warn!(
            "Ignoring {:?}: {book} has only {last_chapter} chapters",
            reference.text
        );
        return Ok(Vec::new());
    }
    let end_verse = reference.end_verse.unwrap_or(u32::MAX);

    let mut out: Vec<ExpandedReference> =
        verse_run(book, start_chapter, start_verse, u32::MAX).collect();
    for chapter in start_chapter + 1..end_chapter {
        out.extend(whole_chapter(book, chapter));
    }
    out.extend(verse_run(book, end_chapter, 1, end_verse));
    Ok(out)
}

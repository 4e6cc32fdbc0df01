//! Tag emission and parsing.
//!
//! Tags are `<prefix><displayId>` for a whole book and
//! `<prefix><displayId>/<chapter>/<verse>` for a verse. Ranges and lists
//! never appear in a tag; they are expanded first.

use std::collections::HashSet;

use crate::bible::{self, DisplayResolver};
use crate::constants::tags::SEGMENT_SEPARATOR;
use crate::services::expander::expand;
use crate::types::{BookId, ExpandedReference, Granularity, ParsedReference};
use crate::utils::natural_cmp;

/// What a tag points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagTarget {
    /// A whole book.
    Book(BookId),
    /// One verse.
    Verse(ExpandedReference),
}

/// Renders references as tags for one display table and prefix.
#[derive(Debug, Clone, Copy)]
pub struct TagEmitter<'a> {
    display: &'a DisplayResolver,
    prefix: &'a str,
    expand_whole_books: bool,
}

impl<'a> TagEmitter<'a> {
    /// Create an emitter.
    pub const fn new(display: &'a DisplayResolver, prefix: &'a str, expand_whole_books: bool) -> Self {
        Self { display, prefix, expand_whole_books }
    }

    /// Tag for a whole book.
    pub fn book_tag(&self, book: BookId) -> String {
        format!("{}{}", self.prefix, self.display.display_id(book))
    }

    /// Tag for one verse.
    pub fn verse_tag(&self, verse: &ExpandedReference) -> String {
        format!(
            "{}{}{SEGMENT_SEPARATOR}{}{SEGMENT_SEPARATOR}{}",
            self.prefix,
            self.display.display_id(verse.book),
            verse.chapter,
            verse.verse
        )
    }

    /// Sorted, deduplicated tags for a batch of references.
    ///
    /// A reference that cannot be expanded is logged and skipped; the rest
    /// of the batch is still tagged.
    pub fn emit<'r>(&self, references: impl IntoIterator<Item = &'r ParsedReference>) -> Vec<String> {
        let mut tags: HashSet<String> = HashSet::new();
        for reference in references {
            if reference.granularity == Granularity::Book && !self.expand_whole_books {
                tags.insert(self.book_tag(reference.book));
                continue;
            }
            match expand(reference) {
                Ok(verses) => tags.extend(verses.iter().map(|v| self.verse_tag(v))),
                Err(e) => tracing::error!("Cannot expand {:?}: {e}", reference.text),
            }
        }
        let mut tags: Vec<String> = tags.into_iter().collect();
        tags.sort_by(|a, b| natural_cmp(a, b));
        tags
    }

    /// Recover the book or verse a tag was emitted for.
    pub fn parse(&self, tag: &str) -> Option<TagTarget> {
        let rest = tag.strip_prefix(self.prefix)?;

        let mut parts = rest.rsplitn(3, SEGMENT_SEPARATOR);
        if let (Some(verse), Some(chapter), Some(display)) = (parts.next(), parts.next(), parts.next()) {
            if let (Some(chapter), Some(verse)) = (parse_segment(chapter), parse_segment(verse)) {
                let book = self.display.book_for(display)?;
                if !bible::contains(book, chapter, verse) {
                    return None;
                }
                return Some(TagTarget::Verse(ExpandedReference::new(book, chapter, verse)));
            }
        }

        self.display.book_for(rest).map(TagTarget::Book)
    }
}

/// Plain decimal segment, no sign.
fn parse_segment(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::{locale, Customizations, WorkingTable};
    use crate::types::{Language, SourceSpan};
    use pretty_assertions::assert_eq;

    fn display() -> DisplayResolver {
        let table =
            WorkingTable::build(locale::table(Language::German).unwrap(), &Customizations::default())
                .unwrap();
        DisplayResolver::build(&table)
    }

    fn id(s: &str) -> BookId {
        s.parse().unwrap()
    }

    #[test]
    fn verse_tags_are_sorted_numerically() {
        let display = display();
        let emitter = TagEmitter::new(&display, "bible/", false);
        let r = ParsedReference::verses(id("John"), 3, &[9, 10, 11], "", SourceSpan::new(0, 0));
        assert_eq!(
            emitter.emit([&r]),
            vec!["bible/Joh/3/9", "bible/Joh/3/10", "bible/Joh/3/11"]
        );
    }

    #[test]
    fn duplicates_collapse() {
        let display = display();
        let emitter = TagEmitter::new(&display, "bible/", false);
        let a = ParsedReference::verses(id("John"), 3, &[16], "", SourceSpan::new(0, 0));
        let b = ParsedReference::verses(id("John"), 3, &[15, 16], "", SourceSpan::new(10, 20));
        assert_eq!(emitter.emit([&a, &b]), vec!["bible/Joh/3/15", "bible/Joh/3/16"]);
    }

    #[test]
    fn whole_book_emits_one_tag_unless_expanded() {
        let display = display();
        let r = ParsedReference::book(id("Col"), "Kolosserbrief", SourceSpan::new(0, 13));
        assert_eq!(TagEmitter::new(&display, "bible/", false).emit([&r]), vec!["bible/Kol"]);
        let expanded = TagEmitter::new(&display, "bible/", true).emit([&r]);
        assert_eq!(expanded.len(), 95);
        assert_eq!(expanded.first().map(String::as_str), Some("bible/Kol/1/1"));
        assert_eq!(expanded.last().map(String::as_str), Some("bible/Kol/4/18"));
    }

    #[test]
    fn unexpandable_reference_does_not_abort_the_batch() {
        let display = display();
        let emitter = TagEmitter::new(&display, "bible/", false);
        let mut broken = ParsedReference::verses(id("John"), 3, &[16], "", SourceSpan::new(0, 0));
        broken.start_verse = None;
        let good = ParsedReference::chapters(id("Jude"), 1, None, "", SourceSpan::new(0, 0));
        assert_eq!(emitter.emit([&broken, &good]).len(), 25);
    }

    #[test]
    fn parse_inverts_emission() {
        let display = display();
        let emitter = TagEmitter::new(&display, "bible/", false);
        let verse = ExpandedReference::new(id("1John"), 4, 8);
        let tag = emitter.verse_tag(&verse);
        assert_eq!(tag, "bible/1Joh/4/8");
        assert_eq!(emitter.parse(&tag), Some(TagTarget::Verse(verse)));
        assert_eq!(emitter.parse("bible/Kol"), Some(TagTarget::Book(id("Col"))));
    }

    #[test]
    fn parse_rejects_foreign_tags() {
        let display = display();
        let emitter = TagEmitter::new(&display, "bible/", false);
        assert_eq!(emitter.parse("todo/Joh/3/16"), None);
        assert_eq!(emitter.parse("bible/Joh/3/99"), None);
        assert_eq!(emitter.parse("bible/Joh/+3/16"), None);
        assert_eq!(emitter.parse("bible/Xyz"), None);
    }
}

//! Bible structure and book-name tables.
//!
//! Static chapter/verse counts, per-language names, user customization and
//! the resolvers built from them.

pub mod aliases;
pub mod canon;
pub mod customize;
pub mod display;
pub mod locale;

pub use aliases::{AliasResolver, BookPattern, StandalonePattern};
pub use customize::{BookMappingCustomization, Customizations, WorkingBook, WorkingTable};
pub use display::DisplayResolver;
pub use locale::{BookLocalization, LanguageTable};

use crate::types::BookId;

/// Number of chapters in a book.
pub fn max_chapter(book: BookId) -> u32 {
    book.canon().chapter_count()
}

/// Number of verses in a chapter, or `None` when the chapter does not exist.
pub fn max_verse(book: BookId, chapter: u32) -> Option<u32> {
    book.canon().verse_count(chapter)
}

/// Whether a (chapter, verse) pair exists in a book.
pub fn contains(book: BookId, chapter: u32, verse: u32) -> bool {
    verse >= 1 && max_verse(book, chapter).is_some_and(|max| verse <= max)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn structure_lookups() {
        let ps: BookId = "Ps".parse().unwrap();
        assert_eq!(max_chapter(ps), 150);
        assert_eq!(max_verse(ps, 119), Some(176));
        assert_eq!(max_verse(ps, 151), None);
    }

    #[test]
    fn contains_checks_both_bounds() {
        let col: BookId = "Col".parse().unwrap();
        assert!(contains(col, 4, 18));
        assert!(!contains(col, 4, 19));
        assert!(!contains(col, 5, 1));
        assert!(!contains(col, 1, 0));
    }
}

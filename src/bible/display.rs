//! Display ids used in emitted tags.

use std::collections::HashMap;

use crate::bible::customize::WorkingTable;
use crate::types::BookId;

/// Maps canonical ids to the display ids of the active language and back.
#[derive(Debug, Clone)]
pub struct DisplayResolver {
    forward: HashMap<BookId, String>,
    reverse: HashMap<String, BookId>,
}

impl DisplayResolver {
    /// Build from a working table. Pinned spellings win over defaults.
    ///
    /// When two books end up with the same display id, the reverse lookup
    /// keeps the later book in canonical order.
    pub fn build(table: &WorkingTable) -> Self {
        let mut forward = HashMap::with_capacity(table.books.len());
        let mut reverse = HashMap::with_capacity(table.books.len());
        for book in &table.books {
            let shown = book.display_id().to_string();
            if let Some(previous) = reverse.insert(shown.clone(), book.book) {
                tracing::warn!(
                    "Display id {shown:?} is shared by {previous} and {}; tags will parse as {}",
                    book.book,
                    book.book
                );
            }
            forward.insert(book.book, shown);
        }
        Self { forward, reverse }
    }

    /// Display id for a book; falls back to the canonical id.
    pub fn display_id(&self, book: BookId) -> &str {
        self.forward.get(&book).map_or_else(|| book.as_str(), String::as_str)
    }

    /// Canonical id for a display id as it appears in a tag.
    pub fn book_for(&self, display_id: &str) -> Option<BookId> {
        self.reverse.get(display_id).copied()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::customize::Customizations;
    use crate::bible::locale;
    use crate::types::Language;

    fn build(language: Language, custom: &Customizations) -> DisplayResolver {
        let table = WorkingTable::build(locale::table(language).unwrap(), custom).unwrap();
        DisplayResolver::build(&table)
    }

    #[test]
    fn default_display_ids_follow_language() {
        let john: BookId = "John".parse().unwrap();
        assert_eq!(build(Language::German, &Customizations::default()).display_id(john), "Joh");
        assert_eq!(build(Language::English, &Customizations::default()).display_id(john), "John");
    }

    #[test]
    fn reverse_lookup_is_exact() {
        let display = build(Language::German, &Customizations::default());
        assert_eq!(display.book_for("Kol"), "Col".parse().ok());
        assert_eq!(display.book_for("kol"), None);
    }

    #[test]
    fn pinned_display_round_trips() {
        let john: BookId = "John".parse().unwrap();
        let mut custom = Customizations::default();
        custom.entry(john).pinned = Some("Johannes".into());
        let display = build(Language::German, &custom);
        assert_eq!(display.display_id(john), "Johannes");
        assert_eq!(display.book_for("Johannes"), Some(john));
        assert_eq!(display.book_for("Joh"), None);
    }

    #[test]
    fn shared_display_id_resolves_to_later_book() {
        let mark: BookId = "Mark".parse().unwrap();
        let luke: BookId = "Luke".parse().unwrap();
        let mut custom = Customizations::default();
        custom.entry(mark).add_aliases = vec!["Ev".into()];
        custom.entry(mark).pinned = Some("Ev".into());
        custom.entry(luke).add_aliases = vec!["Ev".into()];
        custom.entry(luke).pinned = Some("Ev".into());
        let display = build(Language::German, &custom);
        assert_eq!(display.book_for("Ev"), Some(luke));
    }
}

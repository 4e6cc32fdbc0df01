//! User customization of the book tables.
//!
//! A [`Customizations`] record is layered over an immutable
//! [`LanguageTable`] to produce a fresh [`WorkingTable`]. The base table is
//! never touched; a settings change means building a new working table.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bible::locale::LanguageTable;
use crate::error::{Error, Result};
use crate::types::BookId;

/// Per-book adjustments made by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookMappingCustomization {
    /// Aliases recognized in addition to the language's own.
    pub add_aliases: Vec<String>,
    /// Base aliases to stop recognizing.
    pub remove_aliases: Vec<String>,
    /// Extra whole-book phrases.
    pub add_standalone: Vec<String>,
    /// Base whole-book phrases to stop recognizing.
    pub remove_standalone: Vec<String>,
    /// Preferred spelling used as the display id in tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<String>,
}

/// Customizations for all books, keyed by canonical id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Customizations(pub BTreeMap<BookId, BookMappingCustomization>);

impl Customizations {
    /// Parse the persisted JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::parse(format!("Invalid customization table: {e}"), None::<std::path::PathBuf>))
    }

    /// Load the persisted JSON form from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
        serde_json::from_str(&content).map_err(|e| {
            Error::parse(format!("Invalid customization table: {e}"), path.to_path_buf())
        })
    }

    /// Customization for one book, if any.
    pub fn get(&self, book: BookId) -> Option<&BookMappingCustomization> {
        self.0.get(&book)
    }

    /// Mutable access, creating an empty entry when missing.
    pub fn entry(&mut self, book: BookId) -> &mut BookMappingCustomization {
        self.0.entry(book).or_default()
    }

    /// Whether no book is customized.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(|c| *c == BookMappingCustomization::default())
    }
}

/// A book's effective names after customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingBook {
    /// Canonical book.
    pub book: BookId,
    /// Language default display id.
    pub default_display: &'static str,
    /// Full display name.
    pub name: &'static str,
    /// Surviving aliases, canonical id included.
    pub aliases: Vec<String>,
    /// Surviving standalone phrases.
    pub standalone: Vec<String>,
    /// Validated pinned spelling.
    pub pinned: Option<String>,
}

impl WorkingBook {
    /// Display id in effect: the pinned spelling or the language default.
    pub fn display_id(&self) -> &str {
        self.pinned.as_deref().unwrap_or(self.default_display)
    }
}

/// Language table with customizations applied.
#[derive(Debug, Clone)]
pub struct WorkingTable {
    /// Effective names per book, canonical order.
    pub books: Vec<WorkingBook>,
}

/// Lookup key for spellings: lowercase, whitespace and dots removed.
pub fn spelling_key(spelling: &str) -> String {
    spelling
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Apply deletions, then append additions, skipping duplicates by key.
fn layer(base: &[&str], remove: &[String], add: &[String]) -> Vec<String> {
    let removed: Vec<String> = remove.iter().map(|r| spelling_key(r)).collect();
    let mut out: Vec<String> = Vec::with_capacity(base.len() + add.len());
    let mut push = |spelling: &str| {
        let trimmed = spelling.trim();
        let key = spelling_key(trimmed);
        if key.is_empty() || out.iter().any(|s| spelling_key(s) == key) {
            return;
        }
        out.push(trimmed.to_string());
    };
    base.iter()
        .filter(|alias| !removed.contains(&spelling_key(alias)))
        .for_each(|alias| push(alias));
    add.iter().for_each(|alias| push(alias));
    out
}

impl WorkingTable {
    /// Layer customizations over a base table.
    ///
    /// Fails when a pinned spelling is unusable as a tag segment or is not
    /// one of the book's surviving spellings.
    pub fn build(base: &LanguageTable, customizations: &Customizations) -> Result<Self> {
        let empty = BookMappingCustomization::default();
        let mut books = Vec::with_capacity(base.books.len());

        for loc in &base.books {
            let custom = customizations.get(loc.book).unwrap_or(&empty);
            let canonical = loc.book.as_str();
            let canonical_key = spelling_key(canonical);

            if custom.remove_aliases.iter().any(|r| spelling_key(r) == canonical_key) {
                tracing::warn!("Ignoring removal of canonical id {canonical} from its own aliases");
            }

            let mut aliases = layer(loc.aliases, &custom.remove_aliases, &custom.add_aliases);
            if !aliases.iter().any(|a| spelling_key(a) == canonical_key) {
                aliases.push(canonical.to_string());
            }
            let standalone =
                layer(loc.standalone, &custom.remove_standalone, &custom.add_standalone);

            let pinned = match custom.pinned.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(pin) => {
                    if pin.contains('/') || pin.chars().any(char::is_whitespace) {
                        return Err(Error::config(
                            format!("Pinned spelling {pin:?} for {canonical} cannot be used in a tag"),
                            "Pick a spelling without slashes or spaces",
                        ));
                    }
                    let key = spelling_key(pin);
                    let known = aliases.iter().chain(standalone.iter()).any(|s| spelling_key(s) == key);
                    if !known {
                        return Err(Error::config(
                            format!("Pinned spelling {pin:?} is not a known spelling of {canonical}"),
                            "Pin one of the book's aliases or standalone patterns",
                        ));
                    }
                    Some(pin.to_string())
                }
            };

            books.push(WorkingBook {
                book: loc.book,
                default_display: loc.display_id,
                name: loc.name,
                aliases,
                standalone,
                pinned,
            });
        }

        Ok(Self { books })
    }

    /// Working entry for one book.
    pub fn get(&self, book: BookId) -> Option<&WorkingBook> {
        self.books.iter().find(|b| b.book == book)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::bible::locale;
    use crate::types::Language;

    fn john() -> BookId {
        "John".parse().unwrap()
    }

    fn german() -> &'static LanguageTable {
        locale::table(Language::German).unwrap()
    }

    #[test]
    fn spelling_key_ignores_case_dots_and_spaces() {
        assert_eq!(spelling_key("1. Joh"), "1joh");
        assert_eq!(spelling_key("Song of Songs"), "songofsongs");
        assert_eq!(spelling_key("RÖM"), "röm");
    }

    #[test]
    fn canonical_id_is_always_an_alias() {
        let mut custom = Customizations::default();
        custom.entry(john()).remove_aliases = vec!["john".into(), "Joh".into()];
        let table = WorkingTable::build(german(), &custom).unwrap();
        let book = table.get(john()).unwrap();
        assert!(book.aliases.iter().any(|a| a == "John"));
        assert!(!book.aliases.iter().any(|a| a == "Joh"));
    }

    #[test]
    fn additions_are_appended_without_duplicates() {
        let mut custom = Customizations::default();
        custom.entry(john()).add_aliases = vec!["Jo".into(), "joh".into()];
        let table = WorkingTable::build(german(), &custom).unwrap();
        let aliases = &table.get(john()).unwrap().aliases;
        assert_eq!(aliases.iter().filter(|a| spelling_key(a) == "joh").count(), 1);
        assert!(aliases.contains(&"Jo".to_string()));
    }

    #[test]
    fn base_table_is_untouched() {
        let mut custom = Customizations::default();
        custom.entry(john()).remove_aliases = vec!["Johannes".into()];
        let _ = WorkingTable::build(german(), &custom).unwrap();
        assert!(german().get(john()).unwrap().aliases.contains(&"Johannes"));
    }

    #[test]
    fn pinned_spelling_overrides_display() {
        let mut custom = Customizations::default();
        custom.entry(john()).pinned = Some("Johannes".into());
        let table = WorkingTable::build(german(), &custom).unwrap();
        assert_eq!(table.get(john()).unwrap().display_id(), "Johannes");
    }

    #[test]
    fn pinned_spelling_may_come_from_standalone_patterns() {
        let col: BookId = "Col".parse().unwrap();
        let mut custom = Customizations::default();
        custom.entry(col).pinned = Some("Kolosserbrief".into());
        let table = WorkingTable::build(german(), &custom).unwrap();
        assert_eq!(table.get(col).unwrap().display_id(), "Kolosserbrief");
    }

    #[test]
    fn unknown_pinned_spelling_is_a_config_error() {
        let mut custom = Customizations::default();
        custom.entry(john()).pinned = Some("Lukas".into());
        let err = WorkingTable::build(german(), &custom).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn customizations_parse_from_json() {
        let json = r#"{
            "John": { "addAliases": ["Jo"], "pinned": "Johannes" },
            "Col": { "removeStandalone": ["Brief an die Kolosser"] }
        }"#;
        let custom = Customizations::from_json(json).unwrap();
        assert_eq!(custom.get(john()).unwrap().add_aliases, vec!["Jo".to_string()]);
        assert!(!custom.is_empty());
        assert!(Customizations::from_json(r#"{"Hezekiah": {}}"#).is_err());
    }
}

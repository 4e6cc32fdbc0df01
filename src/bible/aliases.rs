//! Book alias resolution.
//!
//! Maps every spelling of a book to its canonical id and builds the
//! alternation pattern the scanner embeds in its reference grammars.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::bible::customize::{spelling_key, WorkingTable};
use crate::error::Result;
use crate::types::BookId;

/// Compiled-size ceiling for generated patterns.
pub(crate) const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Alternation over every known spelling, or nothing at all.
///
/// An empty alternation would match at every position, so a table without
/// spellings yields `Disabled` instead.
#[derive(Debug, Clone)]
pub enum BookPattern {
    /// No spellings survive; nothing can match.
    Disabled,
    /// Spellings sorted longest first.
    Active {
        /// Regex source of the alternation (no flags, no anchors).
        source: String,
        /// The alternation compiled on its own, case-insensitive.
        regex: Regex,
    },
}

impl BookPattern {
    /// Regex source, if any spelling exists.
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Active { source, .. } => Some(source),
        }
    }

    /// Whether matching is disabled.
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// Whole-book phrase matcher for one book.
#[derive(Debug, Clone)]
pub struct StandalonePattern {
    /// Book the phrase denotes.
    pub book: BookId,
    /// Phrase as configured.
    pub phrase: String,
    /// Case-insensitive matcher for the phrase.
    pub regex: Regex,
}

/// Resolves spellings to canonical book ids.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    lookup: HashMap<String, BookId>,
    pattern: BookPattern,
    standalone: Vec<StandalonePattern>,
}

/// Regex fragment matching a spelling.
///
/// Whitespace runs become `\s*`, dots become optional, and a leading book
/// number may be followed by a dot and spaces (`1Joh` also matches `1. Joh`).
fn spelling_source(spelling: &str) -> String {
    let mut out = String::with_capacity(spelling.len() * 2);
    let chars: Vec<char> = spelling.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            while i + 1 < chars.len() && chars[i + 1].is_whitespace() {
                i += 1;
            }
            out.push_str(r"\s*");
        } else if c == '.' {
            out.push_str(r"\.?\s*");
        } else {
            out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
            let next = chars.get(i + 1);
            if i == 0 && c.is_ascii_digit() && next.is_some_and(|n| n.is_alphabetic()) {
                out.push_str(r"\.?\s*");
            }
        }
        i += 1;
    }
    out
}

/// Regex fragment for a standalone phrase: literal text, flexible spaces.
fn phrase_source(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn compile(source: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(source)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?)
}

impl AliasResolver {
    /// Build lookup and patterns from a working table.
    pub fn build(table: &WorkingTable) -> Result<Self> {
        let mut lookup: HashMap<String, BookId> = HashMap::new();
        let mut spellings: Vec<&str> = Vec::new();

        for book in &table.books {
            let mut aliases: Vec<&str> = book.aliases.iter().map(String::as_str).collect();
            aliases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
            for alias in aliases {
                let key = spelling_key(alias);
                if key.is_empty() {
                    continue;
                }
                match lookup.get(&key) {
                    Some(&owner) if owner != book.book => {
                        tracing::debug!("Alias {alias:?} of {} already resolves to {owner}", book.book);
                    }
                    Some(_) => {}
                    None => {
                        lookup.insert(key, book.book);
                        spellings.push(alias);
                    }
                }
            }
        }

        spellings.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
        let pattern = if spellings.is_empty() {
            tracing::warn!("No book spellings configured; reference matching is disabled");
            BookPattern::Disabled
        } else {
            let source = spellings
                .iter()
                .map(|s| spelling_source(s))
                .collect::<Vec<_>>()
                .join("|");
            let regex = compile(&format!("(?:{source})"))?;
            BookPattern::Active { source, regex }
        };

        let mut standalone = Vec::new();
        for book in &table.books {
            for phrase in &book.standalone {
                let source = phrase_source(phrase);
                if source.is_empty() {
                    continue;
                }
                standalone.push((source, book.book, phrase.clone()));
            }
        }
        standalone.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        let standalone = standalone
            .into_iter()
            .map(|(source, book, phrase)| {
                Ok(StandalonePattern { book, phrase, regex: compile(&source)? })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Alias resolver: {} spellings, {} standalone patterns",
            lookup.len(),
            standalone.len()
        );

        Ok(Self { lookup, pattern, standalone })
    }

    /// Canonical id for a spelling, ignoring case, dots and whitespace.
    pub fn resolve(&self, spelling: &str) -> Option<BookId> {
        self.lookup.get(&spelling_key(spelling)).copied()
    }

    /// Alternation over all spellings.
    pub const fn pattern(&self) -> &BookPattern {
        &self.pattern
    }

    /// Whole-book matchers, longest source first.
    pub fn standalone(&self) -> &[StandalonePattern] {
        &self.standalone
    }

    /// Number of distinct spellings.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Whether no spelling is known.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }
}

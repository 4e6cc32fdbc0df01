//! Reference scanner.
//!
//! Four ordered passes over masked text: cross-chapter verse ranges,
//! verse references within one chapter, chapter references, and standalone
//! book phrases. A candidate that overlaps a span claimed by any earlier
//! match is dropped, so no byte of the source is covered twice.

use std::collections::BTreeSet;

use regex::{Captures, Regex, RegexBuilder};

use crate::bible::aliases::{AliasResolver, BookPattern, PATTERN_SIZE_LIMIT};
use crate::config::Separators;
use crate::constants;
use crate::error::Result;
use crate::types::{BookId, ParsedReference, SourceSpan};

/// Largest chapter or verse number the grammar accepts.
pub const MAX_REFERENCE_NUMBER: u32 = 999;

/// Optional abbreviation dot, then horizontal whitespace.
const BOOK_GAP: &str = r"\.?[^\S\r\n]*";

#[derive(Debug, Clone)]
struct Grammars {
    cross_chapter: Regex,
    verse: Regex,
    chapter: Regex,
}

/// Compiled reference grammars for one configuration.
#[derive(Debug, Clone)]
pub struct ReferenceScanner {
    grammars: Option<Grammars>,
    chapter_verse: String,
    list: String,
    ranges: Vec<String>,
}

fn compile(source: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(source)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()?)
}

/// Positive number within grammar bounds.
fn parse_number(digits: &str) -> Option<u32> {
    digits
        .parse::<u32>()
        .ok()
        .filter(|n| (1..=MAX_REFERENCE_NUMBER).contains(n))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// The character before `offset` is not part of a word.
fn starts_word(text: &str, offset: usize) -> bool {
    !text[..offset].chars().next_back().is_some_and(is_word_char)
}

/// The character at `offset` is not part of a word.
fn ends_word(text: &str, offset: usize) -> bool {
    !text[offset..].chars().next().is_some_and(is_word_char)
}

/// A number follows `offset`, possibly after horizontal whitespace.
fn number_follows(text: &str, offset: usize) -> bool {
    text[offset..]
        .chars()
        .find(|c| !(c.is_whitespace() && *c != '\n' && *c != '\r'))
        .is_some_and(|c| c.is_ascii_digit())
}

fn overlaps_any(claimed: &[SourceSpan], span: SourceSpan) -> bool {
    claimed.iter().any(|other| span.overlaps(other))
}

impl ReferenceScanner {
    /// Compile the grammars around a book pattern.
    pub fn build(books: &BookPattern, separators: &Separators) -> Result<Self> {
        let mut ranges = vec![separators.range.clone()];
        for dash in constants::separators::EXTRA_RANGE_DASHES {
            if !ranges.iter().any(|r| r == dash) {
                ranges.push((*dash).to_string());
            }
        }

        let grammars = match books.source() {
            None => None,
            Some(alternation) => {
                let book = format!("(?P<book>{alternation})");
                let cv = regex::escape(&separators.chapter_verse);
                let list = regex::escape(&separators.list);
                let range = format!(
                    "(?:{})",
                    ranges.iter().map(|r| regex::escape(r.as_str())).collect::<Vec<_>>().join("|")
                );
                let run = format!("[0-9]+(?:{range}[0-9]+)?");

                Some(Grammars {
                    cross_chapter: compile(&format!(
                        "{book}{BOOK_GAP}(?P<c1>[0-9]+){cv}(?P<v1>[0-9]+){range}(?P<c2>[0-9]+){cv}(?P<v2>[0-9]+)"
                    ))?,
                    verse: compile(&format!(
                        "{book}{BOOK_GAP}(?P<ch>[0-9]+){cv}(?P<verses>{run}(?:{list}{run})*)"
                    ))?,
                    chapter: compile(&format!(
                        "{book}{BOOK_GAP}(?P<c1>[0-9]+)(?:{range}(?P<c2>[0-9]+))?"
                    ))?,
                })
            }
        };

        Ok(Self {
            grammars,
            chapter_verse: separators.chapter_verse.clone(),
            list: separators.list.clone(),
            ranges,
        })
    }

    /// Find every reference in masked text, ordered by position.
    pub fn scan(&self, text: &str, resolver: &AliasResolver) -> Vec<ParsedReference> {
        let mut claimed: Vec<SourceSpan> = Vec::new();
        let mut found: Vec<ParsedReference> = Vec::new();
        let mut accept = |reference: ParsedReference| {
            if overlaps_any(&claimed, reference.span) {
                tracing::trace!("Dropping overlapping candidate {:?}", reference.text);
                return;
            }
            claimed.push(reference.span);
            found.push(reference);
        };

        if let Some(g) = &self.grammars {
            for caps in g.cross_chapter.captures_iter(text) {
                if let Some(r) = Self::cross_chapter(&caps, text, resolver) {
                    accept(r);
                }
            }
            for caps in g.verse.captures_iter(text) {
                if let Some(r) = self.verse(&caps, text, resolver) {
                    accept(r);
                }
            }
            for caps in g.chapter.captures_iter(text) {
                if let Some(r) = self.chapter(&caps, text, resolver) {
                    accept(r);
                }
            }
        }
        for pattern in resolver.standalone() {
            for m in pattern.regex.find_iter(text) {
                if let Some(r) = Self::standalone(pattern.book, m, text) {
                    accept(r);
                }
            }
        }

        found.sort_by_key(|r| (r.span.start, r.span.end));
        found
    }

    /// Best single reference in a short text such as a file name.
    ///
    /// Tries verse references (cross-chapter first), then chapters, then
    /// standalone phrases, returning the first that parses.
    pub fn scan_first(&self, text: &str, resolver: &AliasResolver) -> Option<ParsedReference> {
        if let Some(g) = &self.grammars {
            let hit = g
                .cross_chapter
                .captures_iter(text)
                .find_map(|caps| Self::cross_chapter(&caps, text, resolver))
                .or_else(|| {
                    g.verse.captures_iter(text).find_map(|caps| self.verse(&caps, text, resolver))
                })
                .or_else(|| {
                    g.chapter.captures_iter(text).find_map(|caps| self.chapter(&caps, text, resolver))
                });
            if hit.is_some() {
                return hit;
            }
        }
        resolver.standalone().iter().find_map(|pattern| {
            pattern
                .regex
                .find_iter(text)
                .find_map(|m| Self::standalone(pattern.book, m, text))
        })
    }

    /// Resolve the book group and compute the claimed span.
    fn head(caps: &Captures<'_>, text: &str, resolver: &AliasResolver) -> Option<(BookId, SourceSpan)> {
        let book = caps.name("book")?;
        if !starts_word(text, book.start()) {
            return None;
        }
        let Some(id) = resolver.resolve(book.as_str()) else {
            tracing::debug!("Spelling {:?} matched but does not resolve", book.as_str());
            return None;
        };
        Some((id, SourceSpan::new(book.start(), caps.get(0)?.end())))
    }

    fn cross_chapter(
        caps: &Captures<'_>,
        text: &str,
        resolver: &AliasResolver,
    ) -> Option<ParsedReference> {
        let (book, span) = Self::head(caps, text, resolver)?;
        let number = |name: &str| caps.name(name).and_then(|m| parse_number(m.as_str()));
        let (c1, v1, c2, v2) = (number("c1")?, number("v1")?, number("c2")?, number("v2")?);
        let matched = &text[span.start..span.end];

        if c2 < c1 {
            tracing::debug!("Rejecting backwards chapter range {matched:?}");
            return None;
        }
        if c1 == c2 {
            if v2 < v1 {
                return None;
            }
            let verses: Vec<u32> = (v1..=v2).collect();
            return Some(ParsedReference::verses(book, c1, &verses, matched, span));
        }
        Some(ParsedReference::cross_chapter(book, (c1, v1), (c2, v2), matched, span))
    }

    fn verse(
        &self,
        caps: &Captures<'_>,
        text: &str,
        resolver: &AliasResolver,
    ) -> Option<ParsedReference> {
        let (book, span) = Self::head(caps, text, resolver)?;
        let chapter = parse_number(caps.name("ch")?.as_str())?;
        let verses = self.parse_verse_part(caps.name("verses")?.as_str());
        if verses.is_empty() {
            return None;
        }
        Some(ParsedReference::verses(book, chapter, &verses, &text[span.start..span.end], span))
    }

    /// A chapter-verse separator and a digit follow `offset`.
    fn verse_follows(&self, text: &str, offset: usize) -> bool {
        text[offset..]
            .strip_prefix(self.chapter_verse.as_str())
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
    }

    fn chapter(
        &self,
        caps: &Captures<'_>,
        text: &str,
        resolver: &AliasResolver,
    ) -> Option<ParsedReference> {
        let (book, span) = Self::head(caps, text, resolver)?;
        // A rejected verse reference is not a chapter reference
        if self.verse_follows(text, span.end) {
            tracing::debug!("Not reading {:?} as a chapter", &text[span.start..span.end]);
            return None;
        }
        let start = parse_number(caps.name("c1")?.as_str())?;
        let end = match caps.name("c2") {
            None => None,
            Some(m) => {
                let end = parse_number(m.as_str())?;
                if end < start {
                    return None;
                }
                (end > start).then_some(end)
            }
        };
        Some(ParsedReference::chapters(book, start, end, &text[span.start..span.end], span))
    }

    fn standalone(book: BookId, m: regex::Match<'_>, text: &str) -> Option<ParsedReference> {
        if !starts_word(text, m.start()) || !ends_word(text, m.end()) || number_follows(text, m.end()) {
            return None;
        }
        Some(ParsedReference::book(book, m.as_str(), SourceSpan::new(m.start(), m.end())))
    }

    /// Split off the first range separator in a segment.
    fn split_range<'t>(&self, segment: &'t str) -> Option<(&'t str, &'t str)> {
        self.ranges
            .iter()
            .filter_map(|sep| segment.find(sep.as_str()).map(|at| (at, sep.len())))
            .min_by_key(|&(at, _)| at)
            .map(|(at, len)| (&segment[..at], &segment[at + len..]))
    }

    /// Parse `16`, `16-18`, `16.18`, `1.5-7.10` into an ascending verse set.
    ///
    /// Backwards ranges and out-of-bounds numbers contribute nothing.
    pub fn parse_verse_part(&self, part: &str) -> Vec<u32> {
        let mut verses = BTreeSet::new();
        for segment in part.split(self.list.as_str()) {
            match self.split_range(segment) {
                Some((a, b)) => {
                    if let (Some(a), Some(b)) = (parse_number(a), parse_number(b)) {
                        if a <= b {
                            verses.extend(a..=b);
                        }
                    }
                }
                None => {
                    if let Some(v) = parse_number(segment) {
                        verses.insert(v);
                    }
                }
            }
        }
        verses.into_iter().collect()
    }
}

//! Blanks out non-prose spans before reference scanning.
//!
//! The masked text has exactly the byte length of the input: every
//! character inside an excluded span becomes spaces (one per UTF-8 byte),
//! line breaks are kept. Offsets found in the masked text are therefore
//! valid offsets into the original.

// Allow expect for compile-time constant regex patterns in LazyLock statics
#![allow(clippy::expect_used)]

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Metadata block at the very start of a document.
static RE_FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A---[ \t]*\r?\n(?:(?s:.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)")
        .expect("valid regex: RE_FRONTMATTER")
});

/// Backtick code fence, first closing fence wins.
static RE_FENCE_BACKTICK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```.*?```").expect("valid regex: RE_FENCE_BACKTICK")
});

/// Tilde code fence, first closing fence wins.
static RE_FENCE_TILDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)~~~.*?~~~").expect("valid regex: RE_FENCE_TILDE")
});

/// Single-line inline code.
static RE_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"`[^`\n]+`").expect("valid regex: RE_INLINE_CODE")
});

/// Internal `[[Note]]` / `[[Note|Alias]]` links.
static RE_WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[[^\[\]\n]+\]\]").expect("valid regex: RE_WIKILINK")
});

/// Scheme followed by a run of non-whitespace.
static RE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S+").expect("valid regex: RE_URL")
});

/// Masks metadata, code, internal links and URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentMasker {
    /// Leave fenced and inline code visible to the scanner.
    pub include_code: bool,
}

impl ContentMasker {
    /// Create a masker.
    pub const fn new(include_code: bool) -> Self {
        Self { include_code }
    }

    fn passes(self) -> Vec<&'static Regex> {
        let mut passes: Vec<&'static Regex> = Vec::with_capacity(6);
        passes.push(&*RE_FRONTMATTER);
        if !self.include_code {
            passes.extend([&*RE_FENCE_BACKTICK, &*RE_FENCE_TILDE, &*RE_INLINE_CODE]);
        }
        passes.extend([&*RE_WIKILINK, &*RE_URL]);
        passes
    }

    /// Run every pass in precedence order over a progressively blanked copy.
    fn run(self, text: &str) -> (String, Vec<Range<usize>>) {
        let mut working = text.to_string();
        let mut spans: Vec<Range<usize>> = Vec::new();
        for re in self.passes() {
            let found: Vec<Range<usize>> = re.find_iter(&working).map(|m| m.range()).collect();
            for range in found {
                blank(&mut working, range.clone());
                spans.push(range);
            }
        }
        spans.sort_by_key(|r| r.start);
        (working, spans)
    }

    /// Text of identical length with excluded spans blanked.
    pub fn mask(self, text: &str) -> String {
        self.run(text).0
    }

    /// Byte ranges that `mask` blanks, sorted by start.
    pub fn excluded_spans(self, text: &str) -> Vec<Range<usize>> {
        self.run(text).1
    }

    /// Whether the byte at `offset` lies inside an excluded span.
    pub fn is_excluded(self, text: &str, offset: usize) -> bool {
        self.excluded_spans(text).iter().any(|r| r.contains(&offset))
    }
}

/// Replace a byte range with spaces, keeping line breaks.
fn blank(text: &mut String, range: Range<usize>) {
    let replacement: String = text[range.clone()]
        .chars()
        .flat_map(|c| {
            let keep = c == '\n' || c == '\r';
            let width = if keep { 1 } else { c.len_utf8() };
            std::iter::repeat_n(if keep { c } else { ' ' }, width)
        })
        .collect();
    text.replace_range(range, &replacement);
}

//! The tagging pipeline.
//!
//! A `Tagger` is an immutable snapshot built from one `Config`. Changing
//! settings means building a new one; a built tagger can be shared across
//! threads and called concurrently.

use std::path::Path;

use crate::bible::{locale, AliasResolver, DisplayResolver, WorkingTable};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::masker::ContentMasker;
use crate::services::scanner::ReferenceScanner;
use crate::services::tags::{TagEmitter, TagTarget};
use crate::types::ParsedReference;
use crate::utils::files::is_document;

/// Text to tags, for one configuration.
#[derive(Debug, Clone)]
pub struct Tagger {
    masker: ContentMasker,
    aliases: AliasResolver,
    display: DisplayResolver,
    scanner: ReferenceScanner,
    tag_prefix: String,
    expand_whole_books: bool,
}

impl Tagger {
    /// Build every table and pattern for a configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.separators.validate()?;
        let base = locale::table(config.language).ok_or_else(|| {
            Error::config(
                format!("No book table for language {}", config.language),
                "Use one of: de, en",
            )
        })?;
        let table = WorkingTable::build(base, &config.customizations)?;
        let aliases = AliasResolver::build(&table)?;
        let display = DisplayResolver::build(&table);
        let scanner = ReferenceScanner::build(aliases.pattern(), &config.separators)?;

        tracing::info!(
            "Tagger ready: language {}, {} spellings, {} standalone phrases",
            config.language,
            aliases.len(),
            aliases.standalone().len()
        );

        Ok(Self {
            masker: ContentMasker::new(config.include_code),
            aliases,
            display,
            scanner,
            tag_prefix: config.tag_prefix.clone(),
            expand_whole_books: config.expand_whole_books,
        })
    }

    fn emitter(&self) -> TagEmitter<'_> {
        TagEmitter::new(&self.display, &self.tag_prefix, self.expand_whole_books)
    }

    /// Display resolver in use.
    pub const fn display(&self) -> &DisplayResolver {
        &self.display
    }

    /// References in a document body, with byte spans into `text`.
    pub fn references(&self, text: &str) -> Vec<ParsedReference> {
        let masked = self.masker.mask(text);
        self.scanner.scan(&masked, &self.aliases)
    }

    /// Tags for a document body.
    pub fn tags(&self, text: &str) -> Vec<String> {
        self.emitter().emit(&self.references(text))
    }

    /// The single reference a file name denotes, if any.
    ///
    /// A document extension is dropped first, so `Joh 3,16.md` reads as
    /// `Joh 3,16`. Any other name is scanned whole, since a dot may be the
    /// list separator (`Röm 8,28.31`).
    pub fn filename_reference(&self, filename: &str) -> Option<ParsedReference> {
        let path = Path::new(filename);
        let stem = if is_document(path) {
            path.file_stem().and_then(std::ffi::OsStr::to_str).unwrap_or(filename)
        } else {
            filename
        };
        self.scanner.scan_first(stem, &self.aliases)
    }

    /// Tags for a document: its body plus the reference in its file name.
    pub fn document_tags(&self, body: &str, filename: Option<&str>) -> Vec<String> {
        let mut references = self.references(body);
        if let Some(reference) = filename.and_then(|name| self.filename_reference(name)) {
            tracing::debug!("File name {filename:?} denotes {:?}", reference.text);
            references.push(reference);
        }
        self.emitter().emit(&references)
    }

    /// Book or verse a tag stands for.
    pub fn parse_tag(&self, tag: &str) -> Option<TagTarget> {
        self.emitter().parse(tag)
    }
}

//! `versetag` - print verse tags for notes.
//!
//! Usage:
//!   `versetag [--json] [--refs] [<file or directory>...]`
//!
//! Reads stdin when no path is given. Directories are walked for Markdown
//! and text files. Settings come from `VERSETAG_*` environment variables or
//! a `.env` file.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use versetag::utils::collect_documents;
use versetag::{Config, ParsedReference, Tagger};

const USAGE: &str = "Usage: versetag [--json] [--refs] [<file or directory>...]";

struct Options {
    json: bool,
    refs: bool,
    paths: Vec<PathBuf>,
}

fn parse_args() -> Result<Option<Options>> {
    let mut options = Options { json: false, refs: false, paths: Vec::new() };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => options.json = true,
            "--refs" => options.refs = true,
            "-h" | "--help" => return Ok(None),
            flag if flag.starts_with("--") => bail!("Unknown option {flag}\n{USAGE}"),
            path => options.paths.push(PathBuf::from(path)),
        }
    }
    Ok(Some(options))
}

/// Result for one document.
#[derive(Debug, Serialize)]
struct DocumentReport {
    path: String,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    references: Option<Vec<ParsedReference>>,
}

fn report(tagger: &Tagger, path: &str, filename: Option<&str>, body: &str, refs: bool) -> DocumentReport {
    DocumentReport {
        path: path.to_string(),
        tags: tagger.document_tags(body, filename),
        references: refs.then(|| tagger.references(body)),
    }
}

fn write_plain(out: &mut impl Write, reports: &[DocumentReport]) -> io::Result<()> {
    let headers = reports.len() > 1;
    for report in reports {
        if headers {
            writeln!(out, "{}:", report.path)?;
        }
        for tag in &report.tags {
            writeln!(out, "{}{tag}", if headers { "  " } else { "" })?;
        }
        for reference in report.references.iter().flatten() {
            writeln!(
                out,
                "  # {:?} at {}..{}",
                reference.text, reference.span.start, reference.span.end
            )?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let Some(options) = parse_args()? else {
        writeln!(io::stdout(), "{USAGE}")?;
        return Ok(());
    };

    let config = Config::load().context("Failed to load configuration")?;
    let tagger = Tagger::new(&config).context("Failed to build book tables")?;

    let reports: Vec<DocumentReport> = if options.paths.is_empty() {
        let mut body = String::new();
        io::stdin().read_to_string(&mut body).context("Failed to read stdin")?;
        vec![report(&tagger, "-", None, &body, options.refs)]
    } else {
        let documents = collect_documents(&options.paths);
        tracing::info!("Tagging {} documents", documents.len());
        documents
            .par_iter()
            .filter_map(|path| match fs_err::read_to_string(path) {
                Ok(body) => {
                    let name = path.file_name().and_then(std::ffi::OsStr::to_str);
                    Some(report(&tagger, &path.display().to_string(), name, &body, options.refs))
                }
                Err(e) => {
                    tracing::warn!("Skipping {e}");
                    None
                }
            })
            .collect()
    };

    let mut out = io::stdout().lock();
    if options.json {
        serde_json::to_writer_pretty(&mut out, &reports).context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        write_plain(&mut out, &reports)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn plain_output_indents_when_several_documents() {
        let tagger = Tagger::new(&Config::default()).unwrap();
        let reports = vec![
            report(&tagger, "a.md", Some("a.md"), "Joh 3,16", false),
            report(&tagger, "b.md", Some("b.md"), "Jud 1,25", true),
        ];
        let mut out = Vec::new();
        write_plain(&mut out, &reports).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "a.md:\n  bible/Joh/3/16\nb.md:\n  bible/Jud/1/25\n  # \"Jud 1,25\" at 0..8\n"
        );
    }
}

//! Document discovery for the command line.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::files::DOCUMENT_EXTENSIONS;

/// Whether a path has one of the document extensions.
pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.iter().any(|d| d.eq_ignore_ascii_case(ext)))
}

/// Expand files and directories into a sorted, deduplicated document list.
///
/// Files named explicitly are kept whatever their extension; directories
/// are walked recursively for document extensions. Unreadable entries are
/// skipped with a warning.
pub fn collect_documents(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut documents: Vec<PathBuf> = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).follow_links(true) {
                match entry {
                    Ok(entry) if entry.file_type().is_file() && is_document(entry.path()) => {
                        documents.push(entry.into_path());
                    }
                    Ok(_) => {}
                    Err(e) => tracing::warn!("Skipping unreadable entry under {}: {e}", path.display()),
                }
            }
        } else {
            documents.push(path.clone());
        }
    }
    documents.sort();
    documents.dedup();
    documents
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn walks_directories_for_documents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("a.md"), "Joh 3,16").unwrap();
        std::fs::write(nested.join("b.txt"), "Ps 23").unwrap();
        std::fs::write(nested.join("c.png"), [0u8; 4]).unwrap();

        let docs = collect_documents(&[dir.path().to_path_buf()]);
        let names: Vec<_> = docs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.txt"]);
    }

    #[test]
    fn explicit_files_are_kept_once() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.log");
        std::fs::write(&file, "").unwrap();
        let docs = collect_documents(&[file.clone(), file.clone()]);
        assert_eq!(docs, vec![file]);
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(is_document(Path::new("Joh 3.MD")));
        assert!(!is_document(Path::new("README")));
    }
}

//! Source discovery for `lumen index`.
//!
//! Directories are walked with the `ignore` crate: `.gitignore` and a
//! `.lumenignore` are honored and the `.lumen/` project directory is always
//! skipped. Explicit file arguments bypass the filters.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use lumen_config::{IndexConfig, PROJECT_DIR};
use tracing::warn;

/// Custom ignore file read in every walked directory.
pub const IGNORE_FILE: &str = ".lumenignore";

/// Build a gitignore-aware walker over `root`.
pub fn build_walker(root: &Path) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    // Hidden files stay visible; .gitignore still filters build output.
    builder.hidden(false);
    builder.add_custom_ignore_filename(IGNORE_FILE);
    builder.filter_entry(|entry| {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        !(is_dir && entry.file_name() == PROJECT_DIR)
    });
    builder.build()
}

/// Expand command-line paths into the list of files to index, in walk order.
pub fn collect_sources(paths: &[PathBuf], config: &IndexConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            warn!(path = %path.display(), "path does not exist, skipped");
            continue;
        }
        for entry in build_walker(path) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(%error, "walk error, entry skipped");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let candidate = entry.into_path();
            if is_indexable(&candidate, config) {
                files.push(candidate);
            }
        }
    }
    files
}

fn is_indexable(path: &Path, config: &IndexConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.accepts_extension(ext))
        && lumen_index::detect_language(&path.to_string_lossy()).is_some()
}

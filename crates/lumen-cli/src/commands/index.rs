use std::path::{Path, PathBuf};

use anyhow::Context;
use lumen_config::LumenConfig;
use lumen_core::StructuralModel;
use lumen_index::{Vocabulary, index_file};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::{GlobalFlags, IndexArgs};
use crate::output::output;
use crate::walk::collect_sources;

/// One indexed file in multi-file output.
#[derive(Debug, Serialize)]
pub struct FileIndex {
    pub path: PathBuf,
    pub model: StructuralModel,
}

/// Handle `lumen index`.
pub fn handle(args: &IndexArgs, config: &LumenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let files = collect_sources(&args.paths, &config.index);
    let single_file = args.paths.len() == 1 && args.paths[0].is_file();
    let parallel = config.general.parallel && !args.sequential;
    debug!(files = files.len(), parallel, "indexing");

    let results = index_all(&files, config, parallel);

    if single_file {
        let Some(result) = results.into_iter().next() else {
            anyhow::bail!("'{}' could not be indexed", args.paths[0].display());
        };
        return output(&result.model, flags.format, config.general.pretty);
    }
    output(&results, flags.format, config.general.pretty)
}

/// Index every file, dropping the ones that fail. Output keeps input order.
pub fn index_all(files: &[PathBuf], config: &LumenConfig, parallel: bool) -> Vec<FileIndex> {
    let vocabulary = config.index.vocabulary();
    let max_bytes = config.index.max_file_bytes;
    let index_one = |path: &PathBuf| match index_checked(path, &vocabulary, max_bytes) {
        Ok(Some(model)) => Some(FileIndex {
            path: path.clone(),
            model,
        }),
        Ok(None) => None,
        Err(error) => {
            warn!(path = %path.display(), "{error:#}");
            None
        }
    };

    if parallel {
        files.par_iter().filter_map(index_one).collect()
    } else {
        files.iter().filter_map(index_one).collect()
    }
}

/// Index one file unless it exceeds the size cap.
fn index_checked(
    path: &Path,
    vocabulary: &Vocabulary,
    max_bytes: u64,
) -> anyhow::Result<Option<StructuralModel>> {
    let size = std::fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    if size > max_bytes {
        warn!(path = %path.display(), size, max_bytes, "file too large, skipped");
        return Ok(None);
    }
    let model = index_file(path, vocabulary)
        .with_context(|| format!("failed to index {}", path.display()))?;
    Ok(Some(model))
}

//! Bulk loading of a source tree into an analysis host.

use std::path::Path;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::ide::AnalysisHost;

use super::LoadError;
use super::file_loader::{collect_file_paths, load_file};

/// Load every source file below `dir` into `host`.
///
/// Files are read in parallel and added in path order. A file that cannot
/// be read is logged and skipped. Returns the number of files loaded.
pub fn load_workspace(host: &mut AnalysisHost, dir: &Path) -> Result<usize, LoadError> {
    let paths = collect_file_paths(dir)?;

    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path, load_file(path)))
        .collect();

    let mut loaded = 0;
    for (path, result) in results {
        match result {
            Ok(text) => {
                host.set_file_content(&path.to_string_lossy(), &text);
                loaded += 1;
            }
            Err(err) => warn!("[LOADER] skipping {}: {}", path.display(), err),
        }
    }

    info!(
        "[LOADER] loaded {} of {} files from {}",
        loaded,
        paths.len(),
        dir.display()
    );
    Ok(loaded)
}

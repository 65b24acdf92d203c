//! File discovery and reading.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::base::constants::SOURCE_EXTENSION;

use super::LoadError;

/// Collect every source file below `dir`, sorted by path.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            LoadError::Io {
                path,
                source: err.into(),
            }
        })?;
        if entry.file_type().is_file() && is_source_file(entry.path()) {
            trace!("[LOADER] found {}", entry.path().display());
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read one file as UTF-8 text.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn is_source_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(SOURCE_EXTENSION)
}

//! Helpers for setting up analysis hosts and declaration corpora.

use ferrule::base::{FileId, TextRange, TextSize};
use ferrule::hir::{Declaration, declarations_in};
use ferrule::ide::AnalysisHost;

/// Creates an AnalysisHost with a single file.
pub fn analysis_from_source(source: &str, filename: &str) -> (AnalysisHost, FileId) {
    let mut host = AnalysisHost::new();
    let file_id = host.set_file_content(filename, source);
    (host, file_id)
}

/// Creates an AnalysisHost with multiple files, in the given order.
pub fn analysis_from_sources(files: &[(&str, &str)]) -> AnalysisHost {
    let mut host = AnalysisHost::new();
    for (path, content) in files {
        host.set_file_content(path, content);
    }
    host
}

/// Scans several sources into one corpus, file ids assigned in order.
pub fn corpus_from_sources(sources: &[&str]) -> Vec<Declaration> {
    sources
        .iter()
        .enumerate()
        .flat_map(|(i, text)| declarations_in(FileId::new(i as u32), text))
        .collect()
}

/// Finds the declaration named `name`, panicking with context if missing.
pub fn decl_named<'a>(decls: &'a [Declaration], name: &str) -> &'a Declaration {
    decls
        .iter()
        .find(|d| d.name.as_ref() == name)
        .unwrap_or_else(|| panic!("no declaration named '{}' in {:?}", name, decls))
}

pub fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

//! Lang-item index: marker attribute → declarations.
//!
//! Built by an external scan that feeds every declaration of a corpus
//! through [`LangItemIndex::index`] into an [`IndexSink`]. The finished
//! index is an immutable snapshot; a changed corpus gets a fresh build.
//!
//! ```text
//! Corpus ──for_each_declaration──▶ LangItemIndex::index ──occurrence──▶ LangItemIndexBuilder
//!                                                                              │ finish()
//!                                                                              ▼
//!                                            find_lang_items / find_lang_item ◀ LangItemIndex
//! ```
//!
//! Markers are expected to be unique per project by convention, but the
//! index does not enforce it: a marker maps to a set of declarations and
//! [`LangItemIndex::find_lang_item`] returns the first one in build order.

use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::base::FileId;
use crate::base::constants::LANG_ITEM_INDEX_VERSION;

use super::decl::Declaration;

/// Receives index occurrences during a build.
pub trait IndexSink {
    fn occurrence(&mut self, key: &str, declaration: &Declaration);
}

/// A set of declarations that can be scanned into an index.
pub trait Corpus {
    fn for_each_declaration(&self, f: &mut dyn FnMut(&Declaration));
}

impl Corpus for [Declaration] {
    fn for_each_declaration(&self, f: &mut dyn FnMut(&Declaration)) {
        self.iter().for_each(f);
    }
}

impl Corpus for Vec<Declaration> {
    fn for_each_declaration(&self, f: &mut dyn FnMut(&Declaration)) {
        self.as_slice().for_each_declaration(f);
    }
}

// ============================================================================
// SEARCH SCOPE
// ============================================================================

/// Restricts queries to part of the corpus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// Everything in the project.
    #[default]
    All,
    /// Only declarations located in these files.
    Files(FxHashSet<FileId>),
}

impl SearchScope {
    pub fn file(file: FileId) -> Self {
        Self::files([file])
    }

    pub fn files(files: impl IntoIterator<Item = FileId>) -> Self {
        Self::Files(files.into_iter().collect())
    }

    pub fn contains(&self, file: FileId) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Files(files) => files.contains(&file),
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Accumulates occurrences for one build pass.
#[derive(Clone, Debug, Default)]
pub struct LangItemIndexBuilder {
    entries: FxHashMap<Arc<str>, IndexSet<Declaration>>,
}

impl LangItemIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> LangItemIndex {
        LangItemIndex {
            entries: self.entries,
            version: LANG_ITEM_INDEX_VERSION,
        }
    }
}

impl IndexSink for LangItemIndexBuilder {
    fn occurrence(&mut self, key: &str, declaration: &Declaration) {
        // Set semantics: indexing the same declaration twice is a no-op.
        if let Some(set) = self.entries.get_mut(key) {
            if !set.contains(declaration) {
                set.insert(declaration.clone());
            }
            return;
        }
        self.entries
            .entry(Arc::from(key))
            .or_default()
            .insert(declaration.clone());
    }
}

// ============================================================================
// INDEX
// ============================================================================

/// Immutable index from lang marker to the declarations carrying it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LangItemIndex {
    pub(super) entries: FxHashMap<Arc<str>, IndexSet<Declaration>>,
    pub(super) version: u32,
}

impl Default for LangItemIndex {
    fn default() -> Self {
        LangItemIndexBuilder::new().finish()
    }
}

impl LangItemIndex {
    /// Indexing hook: record `declaration` under its marker, if it has one.
    pub fn index<S: IndexSink + ?Sized>(declaration: &Declaration, sink: &mut S) {
        if let Some(marker) = declaration.marker() {
            sink.occurrence(marker, declaration);
        }
    }

    /// Build a fresh index by scanning every declaration of `corpus`.
    pub fn build<C: Corpus + ?Sized>(corpus: &C) -> Self {
        let mut builder = LangItemIndexBuilder::new();
        let mut scanned = 0usize;
        corpus.for_each_declaration(&mut |decl: &Declaration| {
            scanned += 1;
            Self::index(decl, &mut builder);
        });
        let index = builder.finish();
        debug!(
            "[LANG_ITEMS] built index: {} declarations scanned, {} markers",
            scanned,
            index.len()
        );
        index
    }

    /// Format version this index was built under.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// All declarations in `scope` tagged with exactly `marker`.
    pub fn find_lang_items(&self, scope: &SearchScope, marker: &str) -> Vec<&Declaration> {
        self.entries
            .get(marker)
            .map(|set| set.iter().filter(|d| scope.contains(d.file())).collect())
            .unwrap_or_default()
    }

    /// First declaration in `scope` tagged with `marker`, in build order.
    pub fn find_lang_item(&self, scope: &SearchScope, marker: &str) -> Option<&Declaration> {
        self.entries
            .get(marker)?
            .iter()
            .find(|d| scope.contains(d.file()))
    }

    /// Markers with more than one declaration in `scope`, sorted by marker.
    pub fn duplicates(&self, scope: &SearchScope) -> Vec<(&str, Vec<&Declaration>)> {
        let mut dups: Vec<_> = self
            .entries
            .keys()
            .map(|marker| (marker.as_ref(), self.find_lang_items(scope, marker)))
            .filter(|(_, decls)| decls.len() > 1)
            .collect();
        dups.sort_by(|a, b| a.0.cmp(b.0));
        dups
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_ref())
    }

    /// Number of distinct markers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

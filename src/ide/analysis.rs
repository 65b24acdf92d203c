//! AnalysisHost and Analysis: Unified state management for IDE features.
//!
//! The `AnalysisHost` owns all mutable state and provides `Analysis` snapshots
//! for querying. This pattern ensures consistent reads across multiple queries.
//!
//! ## Usage
//!
//! ```
//! use ferrule::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.set_file_content("ops.rs", "#[lang = \"add\"] pub trait Add<Rhs = Self> {}");
//!
//! let analysis = host.analysis();
//! let add = analysis.find_lang_item("add").unwrap();
//! assert_eq!(add.name.as_ref(), "Add");
//! ```

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHasher};
use smol_str::{SmolStr, format_smolstr};
use tracing::{debug, info};

use crate::base::{FileId, LineIndex, TextRange, TextSize};
use crate::hir::{
    Corpus, CorpusKey, Declaration, IndexStore, LangItemIndex, RootDatabase, SearchScope,
    SourceText, declarations_in, file_declarations,
};

use super::diagnostics::{Diagnostic, check_lang_items};
use super::fixes::{Anchor, EditHost, ElementPtr, SubstituteTextFix, TextBuffer};

/// A file owned by the host.
struct SourceFile {
    path: String,
    document: Document,
    /// Salsa input for the text as of the last refresh; stale while
    /// `document.edited` is set.
    input: SourceText,
}

/// Live text of a file. Records whether a fix has edited it since the
/// salsa input was last refreshed.
struct Document {
    text: String,
    edited: bool,
}

impl TextBuffer for Document {
    fn text_len(&self) -> TextSize {
        self.text.text_len()
    }

    fn delete_string(&mut self, start: TextSize, end: TextSize) {
        self.edited = true;
        self.text.delete_string(start, end);
    }

    fn insert_string(&mut self, offset: TextSize, text: &str) {
        self.edited = true;
        self.text.insert_string(offset, text);
    }

    fn is_valid_range(&self, range: TextRange) -> bool {
        self.text.is_valid_range(range)
    }
}

/// Optional persisted-index backing for a host.
struct StoreBinding {
    store: Arc<dyn IndexStore>,
    root: SmolStr,
    /// Key of the entry this host loaded or saved last.
    last_key: Option<CorpusKey>,
}

/// Owns all mutable state for the IDE layer.
///
/// Apply changes via `set_file_content()`, `remove_file()` and fixes,
/// then get a consistent snapshot via `analysis()`.
pub struct AnalysisHost {
    db: RootDatabase,
    files: FxHashMap<FileId, SourceFile>,
    /// Map from file path to FileId
    file_id_map: FxHashMap<String, FileId>,
    next_file_id: u32,
    /// Last built index; `None` when the files changed since.
    lang_items: Option<Arc<LangItemIndex>>,
    store: Option<StoreBinding>,
}

impl Default for AnalysisHost {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisHost {
    pub fn new() -> Self {
        Self {
            db: RootDatabase::new(),
            files: FxHashMap::default(),
            file_id_map: FxHashMap::default(),
            next_file_id: 0,
            lang_items: None,
            store: None,
        }
    }

    /// Back the lang-item index with `store`.
    ///
    /// Entries are keyed by `root` plus a fingerprint of every file's path
    /// and text, so a host only ever reuses an index built from the exact
    /// same files.
    ///
    /// Hosts sharing a store and a root share the entry for identical
    /// files. When one of them rebuilds under a new key it removes its
    /// previous entry, which may be the one another host loaded; that host
    /// rebuilds and saves it again on its next miss.
    pub fn with_store(mut self, store: Arc<dyn IndexStore>, root: impl Into<SmolStr>) -> Self {
        self.store = Some(StoreBinding {
            store,
            root: root.into(),
            last_key: None,
        });
        self.lang_items = None;
        self
    }

    /// Set the content of a file, adding it if it is new.
    pub fn set_file_content(&mut self, path: &str, content: &str) -> FileId {
        let file_id = match self.file_id_map.get(path) {
            Some(&id) => id,
            None => {
                let id = FileId::new(self.next_file_id);
                self.next_file_id += 1;
                self.file_id_map.insert(path.to_string(), id);
                id
            }
        };

        let input = SourceText::new(&self.db, file_id, content.to_string());
        self.files.insert(
            file_id,
            SourceFile {
                path: path.to_string(),
                document: Document {
                    text: content.to_string(),
                    edited: false,
                },
                input,
            },
        );
        self.mark_dirty();
        file_id
    }

    /// Remove a file. Returns whether it existed.
    pub fn remove_file(&mut self, path: &str) -> bool {
        let Some(file_id) = self.file_id_map.remove(path) else {
            return false;
        };
        self.files.remove(&file_id);
        self.mark_dirty();
        true
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.file_id_map.contains_key(path)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn get_file_id(&self, path: &str) -> Option<FileId> {
        self.file_id_map.get(path).copied()
    }

    pub fn get_file_path(&self, file_id: FileId) -> Option<&str> {
        self.files.get(&file_id).map(|f| f.path.as_str())
    }

    /// Current text of a file, including edits applied by fixes.
    pub fn file_text(&self, file_id: FileId) -> Option<&str> {
        self.files.get(&file_id).map(|f| f.document.text.as_str())
    }

    /// Declarations currently in a file, in source order.
    pub fn declarations(&self, file_id: FileId) -> Vec<Declaration> {
        let Some(file) = self.files.get(&file_id) else {
            return Vec::new();
        };
        if file.document.edited {
            declarations_in(file_id, &file.document.text)
        } else {
            file_declarations(&self.db, file.input)
        }
    }

    /// Mark the index as needing rebuild (call after external changes).
    pub fn mark_dirty(&mut self) {
        self.lang_items = None;
    }

    /// Apply a fix to the live documents. Returns whether anything changed.
    pub fn apply_fix<A>(&mut self, fix: &SubstituteTextFix<A>) -> bool
    where
        A: Anchor,
        Self: EditHost<A>,
    {
        fix.apply(self)
    }

    /// Rebuild the lang-item index from the current files.
    ///
    /// This is called automatically by `analysis()` if the index is dirty.
    pub fn rebuild_index(&mut self) {
        self.refresh_inputs();

        let corpus = HostCorpus { host: self };
        let (index, key) = match &self.store {
            Some(binding) => {
                let key = CorpusKey::new(format_smolstr!(
                    "{}@{:016x}",
                    binding.root,
                    self.fingerprint()
                ));
                let index = LangItemIndex::load_or_build(binding.store.as_ref(), &key, &corpus);
                (index, Some(key))
            }
            None => (LangItemIndex::build(&corpus), None),
        };

        if let (Some(binding), Some(key)) = (self.store.as_mut(), key) {
            if let Some(previous) = binding.last_key.replace(key.clone()) {
                if previous != key {
                    debug!("[ANALYSIS] dropping superseded index '{}'", previous.as_str());
                    binding.store.remove(&previous);
                }
            }
        }

        info!(
            "[ANALYSIS] lang items rebuilt: {} files, {} markers",
            self.files.len(),
            index.len()
        );
        self.lang_items = Some(Arc::new(index));
    }

    /// Get a consistent snapshot for querying.
    ///
    /// If the index is dirty or a fix edited a file, it will be rebuilt
    /// first.
    pub fn analysis(&mut self) -> Analysis<'_> {
        if self.lang_items.is_none() || self.has_edits() {
            self.rebuild_index();
        }
        let lang_items = self.lang_items.clone().unwrap_or_default();
        Analysis {
            host: self,
            lang_items,
        }
    }

    /// Re-create salsa inputs for files edited through a buffer.
    fn refresh_inputs(&mut self) {
        for (&file_id, file) in self.files.iter_mut() {
            if file.document.edited {
                file.input = SourceText::new(&self.db, file_id, file.document.text.clone());
                file.document.edited = false;
            }
        }
    }

    fn has_edits(&self) -> bool {
        self.files.values().any(|f| f.document.edited)
    }

    /// Files in id order, so builds are deterministic.
    fn sorted_files(&self) -> Vec<(FileId, &SourceFile)> {
        let mut files: Vec<_> = self.files.iter().map(|(&id, f)| (id, f)).collect();
        files.sort_by_key(|(id, _)| *id);
        files
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        for (_, file) in self.sorted_files() {
            file.path.hash(&mut hasher);
            file.document.text.hash(&mut hasher);
        }
        hasher.finish()
    }

    fn buffer_for_edit(&mut self, file_id: FileId) -> Option<&mut dyn TextBuffer> {
        let file = self.files.get_mut(&file_id)?;
        Some(&mut file.document)
    }
}

/// The host's files, scanned in id order.
struct HostCorpus<'a> {
    host: &'a AnalysisHost,
}

impl Corpus for HostCorpus<'_> {
    fn for_each_declaration(&self, f: &mut dyn FnMut(&Declaration)) {
        for (file_id, _) in self.host.sorted_files() {
            for decl in self.host.declarations(file_id) {
                f(&decl);
            }
        }
    }
}

impl EditHost<Declaration> for AnalysisHost {
    /// Re-scans the declaration's file and follows it to its current range.
    fn element_range(&self, anchor: &Declaration) -> Option<TextRange> {
        let current = self.declarations(anchor.file());
        current
            .iter()
            .find(|d| d.id == anchor.id && d.name == anchor.name)
            .or_else(|| current.iter().find(|d| d.name == anchor.name))
            .map(|d| d.range)
    }

    fn document_mut(&mut self, file: FileId) -> Option<&mut dyn TextBuffer> {
        self.buffer_for_edit(file)
    }
}

impl EditHost<ElementPtr> for AnalysisHost {
    fn element_range(&self, anchor: &ElementPtr) -> Option<TextRange> {
        self.files.contains_key(&anchor.file).then_some(anchor.range)
    }

    fn document_mut(&mut self, file: FileId) -> Option<&mut dyn TextBuffer> {
        self.buffer_for_edit(file)
    }
}

/// An immutable snapshot of the analysis state.
///
/// All IDE queries go through this struct to ensure consistent results.
pub struct Analysis<'a> {
    host: &'a AnalysisHost,
    lang_items: Arc<LangItemIndex>,
}

impl<'a> Analysis<'a> {
    // ==================== Lang items ====================

    pub fn lang_items(&self) -> &LangItemIndex {
        &self.lang_items
    }

    /// The index snapshot, to keep querying after the host changes.
    pub fn lang_items_snapshot(&self) -> Arc<LangItemIndex> {
        Arc::clone(&self.lang_items)
    }

    /// All project declarations tagged with `marker`.
    pub fn find_lang_items(&self, marker: &str) -> Vec<&Declaration> {
        self.lang_items.find_lang_items(&SearchScope::All, marker)
    }

    /// One project declaration tagged with `marker`, if any.
    pub fn find_lang_item(&self, marker: &str) -> Option<&Declaration> {
        self.lang_items.find_lang_item(&SearchScope::All, marker)
    }

    // ==================== Per-file features ====================

    pub fn declarations(&self, file_id: FileId) -> Vec<Declaration> {
        self.host.declarations(file_id)
    }

    /// Lang-item diagnostics located in `file_id`.
    pub fn diagnostics(&self, file_id: FileId) -> Vec<Diagnostic> {
        check_lang_items(&self.lang_items, &SearchScope::All)
            .into_iter()
            .filter(|d| d.file == file_id)
            .collect()
    }

    pub fn line_index(&self, file_id: FileId) -> Option<LineIndex> {
        self.host.file_text(file_id).map(LineIndex::new)
    }

    // ==================== Accessors ====================

    pub fn get_file_id(&self, path: &str) -> Option<FileId> {
        self.host.get_file_id(path)
    }

    pub fn get_file_path(&self, file_id: FileId) -> Option<&str> {
        self.host.get_file_path(file_id)
    }
}

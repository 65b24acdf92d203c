//! Persisted lang-item indexes.
//!
//! An [`IndexStore`] keeps one [`StoredLangItems`] per corpus, tagged
//! with the format version it was written under. Entries with another
//! version are dropped whole and rebuilt, never merged.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::constants::LANG_ITEM_INDEX_VERSION;

use super::decl::Declaration;
use super::lang_items::{Corpus, IndexSink, LangItemIndex, LangItemIndexBuilder};

/// Identity of a corpus in a store, e.g. a project root path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CorpusKey(SmolStr);

impl CorpusKey {
    pub fn new(key: impl Into<SmolStr>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Storable form of a [`LangItemIndex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredLangItems {
    pub version: u32,
    /// Marker → declarations, sorted by marker.
    pub entries: Vec<(Arc<str>, Vec<Declaration>)>,
}

/// Key-value persistence for lang-item indexes.
pub trait IndexStore: Send + Sync {
    fn load(&self, key: &CorpusKey) -> Option<StoredLangItems>;
    fn save(&self, key: CorpusKey, stored: StoredLangItems);
    fn remove(&self, key: &CorpusKey);
}

/// In-memory [`IndexStore`], shareable between hosts.
#[derive(Debug, Default)]
pub struct MemoryIndexStore {
    entries: RwLock<FxHashMap<CorpusKey, StoredLangItems>>,
}

impl MemoryIndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl IndexStore for MemoryIndexStore {
    fn load(&self, key: &CorpusKey) -> Option<StoredLangItems> {
        self.entries.read().get(key).cloned()
    }

    fn save(&self, key: CorpusKey, stored: StoredLangItems) {
        self.entries.write().insert(key, stored);
    }

    fn remove(&self, key: &CorpusKey) {
        self.entries.write().remove(key);
    }
}

impl LangItemIndex {
    pub fn to_stored(&self) -> StoredLangItems {
        let mut entries: Vec<(Arc<str>, Vec<Declaration>)> = self
            .entries
            .iter()
            .map(|(marker, decls)| (marker.clone(), decls.iter().cloned().collect()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        StoredLangItems {
            version: self.version,
            entries,
        }
    }

    /// Rebuild an index from stored data.
    ///
    /// Returns `None` if the data was written under another format version.
    pub fn from_stored(stored: StoredLangItems) -> Option<Self> {
        if stored.version != LANG_ITEM_INDEX_VERSION {
            return None;
        }
        let mut builder = LangItemIndexBuilder::new();
        for (marker, decls) in &stored.entries {
            for decl in decls {
                builder.occurrence(marker, decl);
            }
        }
        Some(builder.finish())
    }

    /// Load the index for `key` from `store`, rebuilding from `corpus` if
    /// the entry is missing or was written under another version.
    ///
    /// A rebuilt index replaces the stored entry.
    pub fn load_or_build<C: Corpus + ?Sized>(
        store: &dyn IndexStore,
        key: &CorpusKey,
        corpus: &C,
    ) -> Self {
        match store.load(key) {
            Some(stored) => {
                let stored_version = stored.version;
                if let Some(index) = Self::from_stored(stored) {
                    debug!("[LANG_ITEMS] store hit for '{}'", key.as_str());
                    return index;
                }
                debug!(
                    "[LANG_ITEMS] dropping '{}': stored version {} != {}",
                    key.as_str(),
                    stored_version,
                    LANG_ITEM_INDEX_VERSION
                );
                store.remove(key);
            }
            None => debug!("[LANG_ITEMS] store miss for '{}'", key.as_str()),
        }

        let index = Self::build(corpus);
        store.save(key.clone(), index.to_stored());
        index
    }
}

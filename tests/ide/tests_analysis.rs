//! AnalysisHost tests: lang items, diagnostics, and fixes end to end.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::{FMT_MODULE, OPS_MODULE};
use ferrule::hir::{CorpusKey, IndexStore, MemoryIndexStore, StoredLangItems};
use ferrule::ide::{AnalysisHost, DUPLICATE_LANG_ITEM, Severity};

#[test]
fn test_lang_items_across_files() {
    let mut host = analysis_from_sources(&[("fmt.rs", FMT_MODULE), ("ops.rs", OPS_MODULE)]);
    let analysis = host.analysis();

    assert_eq!(analysis.find_lang_items("core::fmt::Display").len(), 2);
    let add = analysis.find_lang_item("add").unwrap();
    assert_eq!(analysis.get_file_path(add.file()), Some("ops.rs"));
    assert!(analysis.find_lang_item("mul").is_none());
}

#[test]
fn test_marker_change_is_picked_up() {
    let (mut host, _) = analysis_from_source("#[lang = \"deref\"] trait Deref {}", "a.rs");
    assert!(host.analysis().find_lang_item("deref").is_some());

    host.set_file_content("a.rs", "#[lang = \"deref_mut\"] trait Deref {}");
    let analysis = host.analysis();
    assert!(analysis.find_lang_item("deref").is_none());
    assert!(analysis.find_lang_item("deref_mut").is_some());
}

#[test]
fn test_duplicate_diagnostic_and_fix() {
    let (mut host, file_id) = analysis_from_source(FMT_MODULE, "fmt.rs");

    let diagnostic = {
        let analysis = host.analysis();
        let diagnostics = analysis.diagnostics(file_id);
        assert_eq!(diagnostics.len(), 1);
        diagnostics.into_iter().next().unwrap()
    };
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.code.as_deref(), Some(DUPLICATE_LANG_ITEM));
    assert!(!diagnostic.message.contains("LegacyDisplay"));
    assert!(diagnostic.message.contains("`Display`"));

    let fix = diagnostic.fix.unwrap();
    assert_eq!(fix.text(), "Remove duplicate lang attribute");
    assert!(host.apply_fix(&fix));

    let text = host.file_text(file_id).unwrap();
    assert!(text.contains("#[doc(hidden)]\n\npub trait LegacyDisplay {}"));

    let analysis = host.analysis();
    assert!(analysis.diagnostics(file_id).is_empty());
    assert_eq!(analysis.find_lang_items("core::fmt::Display").len(), 1);
}

/// Memory store that counts saves, to tell a store hit from a rebuild.
#[derive(Default)]
struct CountingStore {
    inner: MemoryIndexStore,
    saves: AtomicUsize,
}

impl IndexStore for CountingStore {
    fn load(&self, key: &CorpusKey) -> Option<StoredLangItems> {
        self.inner.load(key)
    }

    fn save(&self, key: CorpusKey, stored: StoredLangItems) {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(key, stored);
    }

    fn remove(&self, key: &CorpusKey) {
        self.inner.remove(key);
    }
}

#[test]
fn test_hosts_share_a_store() {
    let store = Arc::new(CountingStore::default());

    let mut first = AnalysisHost::new().with_store(store.clone(), "workspace");
    first.set_file_content("ops.rs", OPS_MODULE);
    let _ = first.analysis();
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);

    // Same files in a second host: loaded from the store, not rebuilt.
    let mut second = AnalysisHost::new().with_store(store.clone(), "workspace");
    second.set_file_content("ops.rs", OPS_MODULE);
    assert!(second.analysis().find_lang_item("sub").is_some());
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    assert_eq!(store.inner.len(), 1);

    // A change in the second host supersedes the shared entry.
    second.set_file_content("ops.rs", "#[lang = \"mul\"] trait Mul {}");
    let _ = second.analysis();
    assert_eq!(store.saves.load(Ordering::SeqCst), 2);
    assert_eq!(store.inner.len(), 1);

    // The first host still answers from its own snapshot.
    assert!(first.analysis().find_lang_item("add").is_some());
}

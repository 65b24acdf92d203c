//! Persisted lang-item index tests.

use std::sync::Arc;

use crate::helpers::hir_helpers::*;
use crate::helpers::source_fixtures::OPS_MODULE;
use ferrule::base::constants::LANG_ITEM_INDEX_VERSION;
use ferrule::hir::{CorpusKey, IndexStore, LangItemIndex, MemoryIndexStore, SearchScope};

#[test]
fn test_store_roundtrip_keeps_queries() {
    let corpus = corpus_from_sources(&[OPS_MODULE]);
    let built = LangItemIndex::build(&corpus);

    let restored = LangItemIndex::from_stored(built.to_stored()).unwrap();
    assert_eq!(restored.version(), LANG_ITEM_INDEX_VERSION);
    assert_eq!(
        restored.find_lang_item(&SearchScope::All, "add"),
        Some(decl_named(&corpus, "Add"))
    );
}

#[test]
fn test_other_version_is_rebuilt_not_merged() {
    let store: Arc<dyn IndexStore> = Arc::new(MemoryIndexStore::new());
    let key = CorpusKey::new("ops");

    let old = LangItemIndex::build(&corpus_from_sources(&["#[lang = \"mul\"] trait Mul {}"]));
    let mut stored = old.to_stored();
    stored.version += 1;
    store.save(key.clone(), stored);

    let corpus = corpus_from_sources(&[OPS_MODULE]);
    let index = LangItemIndex::load_or_build(store.as_ref(), &key, &corpus);

    assert!(index.find_lang_item(&SearchScope::All, "mul").is_none());
    assert!(index.find_lang_item(&SearchScope::All, "add").is_some());
    assert_eq!(store.load(&key).unwrap().version, LANG_ITEM_INDEX_VERSION);
}

//! High-level IR (HIR): declarations and the lang-item index.
//!
//! ## Key Types
//!
//! - [`Declaration`] - A named item found in a source file
//! - [`DeclId`] - Identifier for a declaration (file + local index)
//! - [`RootDatabase`] - Salsa database memoizing per-file scans
//! - [`LangItemIndex`] - Lang marker → declarations, rebuilt per corpus state
//! - [`IndexStore`] - Versioned persistence for built indexes
//!
//! ## Query Layers
//!
//! ```text
//! SourceText(file, text)     ← INPUT: raw source text
//!     │
//!     ▼
//! file_declarations(file)    ← Scan trait items (per-file, memoized)
//!     │
//!     ▼
//! LangItemIndex::build       ← Corpus-wide index (one snapshot per corpus state)
//!     │
//!     ▼
//! find_lang_item(s)(scope, marker)
//! ```

mod db;
mod decl;
mod ids;
mod lang_items;
mod store;

pub use db::{RootDatabase, SourceText, file_declarations};
pub use decl::{DeclKind, Declaration, declarations_in};
pub use ids::{DeclId, LocalDeclId};
pub use lang_items::{Corpus, IndexSink, LangItemIndex, LangItemIndexBuilder, SearchScope};
pub use store::{CorpusKey, IndexStore, MemoryIndexStore, StoredLangItems};

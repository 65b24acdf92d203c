//! HIR layer tests
//!
//! Tests for the lang-item index:
//! - Marker lookup across a corpus
//! - Rebuilds after corpus changes
//! - Persisted indexes and format versions

pub mod tests_store;

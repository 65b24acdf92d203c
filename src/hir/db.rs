//! Salsa database definition and queries.

use crate::base::FileId;

use super::decl::{Declaration, declarations_in};

// ============================================================================
// INPUTS
// ============================================================================

/// Input: The raw text content of a file.
///
/// A new input is created whenever a file's text changes; inputs of
/// unchanged files keep their memoized declarations.
#[salsa::input]
pub struct SourceText {
    pub file: FileId,
    #[return_ref]
    pub text: String,
}

// ============================================================================
// DATABASE
// ============================================================================

/// The root Salsa database for HIR operations.
#[salsa::db]
#[derive(Default, Clone)]
pub struct RootDatabase {
    storage: salsa::Storage<Self>,
}

#[salsa::db]
impl salsa::Database for RootDatabase {
    fn salsa_event(&self, _event: &dyn Fn() -> salsa::Event) {}
}

impl RootDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// TRACKED QUERIES
// ============================================================================

/// Scan a file for declarations.
///
/// Memoized per input: re-running it for an unchanged file is free.
#[salsa::tracked]
pub fn file_declarations(db: &dyn salsa::Database, source: SourceText) -> Vec<Declaration> {
    let file = source.file(db);
    declarations_in(file, source.text(db))
}

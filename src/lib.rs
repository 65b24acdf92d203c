//! # ferrule-base
//!
//! Lang-item indexing and text-substitution fixes for Rust sources.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Workspace loading (walkdir + rayon)
//!   ↓
//! ide       → AnalysisHost/Analysis, fixes, lang-item diagnostics
//!   ↓
//! hir       → Declarations, Salsa queries, lang-item index and store
//!   ↓
//! syntax    → Logos lexer, attribute and item scanning
//!   ↓
//! base      → Primitives (FileId, TextRange, LineIndex, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → hir → ide → project)
// ============================================================================

/// Foundation types: FileId, TextRange, LineIndex
pub mod base;

/// Syntax: Logos lexer, lang attributes, trait item scanner
pub mod syntax;

/// High-level IR: declarations, Salsa queries, lang-item index
pub mod hir;

/// IDE features: analysis snapshots, fixes, diagnostics
pub mod ide;

/// Project management: workspace loading
pub mod project;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, TextRange, TextSize};

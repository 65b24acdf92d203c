//! Foundation types for the Ferrule toolchain.
//!
//! This module provides fundamental types used throughout the library:
//! - [`FileId`] - Interned file identifiers
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - Library constants (file extension, attribute name, index version)
//!
//! This module has NO dependencies on other ferrule modules.

pub mod constants;
mod file_id;
mod span;

pub use file_id::FileId;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;

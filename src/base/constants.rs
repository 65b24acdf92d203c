//! Library-wide constants.

/// Extension of source files picked up by the workspace loader.
pub const SOURCE_EXTENSION: &str = "rs";

/// Name of the attribute that marks a lang item (`#[lang = "..."]`).
pub const LANG_ATTRIBUTE: &str = "lang";

/// Label used by a substitution fix when the caller does not provide one.
pub const DEFAULT_FIX_NAME: &str = "Substitute";

/// Family name shared by every substitution fix.
pub const FIX_FAMILY_NAME: &str = "Substitute one text to another";

/// Format version of lang-item index data.
///
/// Bump whenever [`Declaration`](crate::hir::Declaration) or the stored
/// index layout changes. Stored indexes with another version are discarded.
pub const LANG_ITEM_INDEX_VERSION: u32 = 3;

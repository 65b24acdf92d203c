//! Identifiers for indexed declarations.

use std::fmt;

use crate::base::FileId;

/// A globally unique identifier for a declaration.
///
/// Combines the file where the declaration lives with a file-local ID,
/// so a single file can be re-scanned without renumbering the others.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DeclId {
    pub file: FileId,
    pub local: LocalDeclId,
}

impl DeclId {
    #[inline]
    pub const fn new(file: FileId, local: LocalDeclId) -> Self {
        Self { file, local }
    }
}

impl fmt::Debug for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeclId({:?}:{})", self.file, self.local.0)
    }
}

/// A file-local declaration identifier.
///
/// Assigned in source order while scanning a file. Stable across
/// re-scans as long as the item order doesn't change.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LocalDeclId(pub u32);

impl LocalDeclId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LocalDeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalDeclId({})", self.0)
    }
}

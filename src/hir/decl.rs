//! Declarations handed to the lang-item index.

use std::sync::Arc;

use crate::base::{FileId, TextRange};
use crate::syntax::{ItemDecl, ItemKind, LangAttr, scan_items};

use super::ids::{DeclId, LocalDeclId};

/// Kind of a declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Trait,
}

impl From<ItemKind> for DeclKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Trait => DeclKind::Trait,
        }
    }
}

/// A named declaration located in a source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub id: DeclId,
    pub kind: DeclKind,
    pub name: Arc<str>,
    /// Absolute range of the whole item, outer attributes included.
    pub range: TextRange,
    pub name_range: TextRange,
    /// `None` when the item has no `lang` attribute or it is malformed.
    pub lang: Option<LangAttr>,
}

impl Declaration {
    pub fn file(&self) -> FileId {
        self.id.file
    }

    /// The lang marker, e.g. `add` for `#[lang = "add"]`.
    pub fn marker(&self) -> Option<&str> {
        self.lang.as_ref().map(|attr| attr.value.as_ref())
    }

    fn from_item(file: FileId, local: u32, item: ItemDecl) -> Self {
        Self {
            id: DeclId::new(file, LocalDeclId::new(local)),
            kind: item.kind.into(),
            name: item.name,
            range: item.range,
            name_range: item.name_range,
            lang: item.lang,
        }
    }
}

/// Scan a file's text and number its declarations in source order.
pub fn declarations_in(file: FileId, text: &str) -> Vec<Declaration> {
    scan_items(text)
        .into_iter()
        .enumerate()
        .map(|(local, item)| Declaration::from_item(file, local as u32, item))
        .collect()
}

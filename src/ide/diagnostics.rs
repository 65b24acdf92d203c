//! Lang-item diagnostics.
//!
//! The index keeps every declaration carrying a marker; uniqueness is a
//! project convention only. This check reports the extra declarations so
//! the user can fix them, each with a fix that removes the attribute.

use std::sync::Arc;

use crate::base::{FileId, LineCol, LineIndex, TextRange};
use crate::hir::{Declaration, LangItemIndex, SearchScope};

use super::fixes::SubstituteTextFix;

/// Code reported for a marker declared more than once.
pub const DUPLICATE_LANG_ITEM: &str = "W0001";

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location and an optional fix.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub file: FileId,
    /// Absolute range the diagnostic points at.
    pub range: TextRange,
    pub severity: Severity,
    pub code: Option<Arc<str>>,
    pub message: Arc<str>,
    pub fix: Option<SubstituteTextFix<Declaration>>,
}

impl Diagnostic {
    /// Start and end of the range as line/column positions.
    pub fn span(&self, line_index: &LineIndex) -> (LineCol, LineCol) {
        (
            line_index.line_col(self.range.start()),
            line_index.line_col(self.range.end()),
        )
    }
}

/// Report every declaration that repeats a marker already declared earlier
/// in build order, restricted to `scope`.
pub fn check_lang_items(index: &LangItemIndex, scope: &SearchScope) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (marker, decls) in index.duplicates(scope) {
        let Some((first, rest)) = decls.split_first() else {
            continue;
        };
        for decl in rest {
            diagnostics.push(duplicate_lang_item(marker, first, decl));
        }
    }
    diagnostics
}

fn duplicate_lang_item(marker: &str, first: &Declaration, duplicate: &Declaration) -> Diagnostic {
    let range = duplicate
        .lang
        .as_ref()
        .map_or(duplicate.name_range, |attr| attr.range);
    let fix = duplicate
        .lang
        .as_ref()
        .and_then(|attr| attr.range.checked_sub(duplicate.range.start()))
        .and_then(|relative| {
            SubstituteTextFix::delete(
                Some("Remove duplicate lang attribute"),
                duplicate.clone(),
                relative,
            )
            .ok()
        });

    Diagnostic {
        file: duplicate.file(),
        range,
        severity: Severity::Warning,
        code: Some(Arc::from(DUPLICATE_LANG_ITEM)),
        message: Arc::from(format!(
            "duplicate lang item `{}`; first declared as `{}`",
            marker, first.name
        )),
        fix,
    }
}

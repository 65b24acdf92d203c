//! Text-substitution fixes.
//!
//! A [`SubstituteTextFix`] removes a range inside an element and puts a
//! text in its place. The range is relative to the element, and the
//! element's absolute position is looked up again when the fix is
//! applied, so a fix can be queued and applied after earlier edits have
//! shifted the document.
//!
//! ## Example
//!
//! ```
//! use ferrule::base::{FileId, TextRange, TextSize};
//! use ferrule::ide::{ElementPtr, SubstituteTextFix, TextBuffer};
//!
//! let mut text = String::from("fn f() { let x = 1;; }");
//! let stmt = ElementPtr::new(FileId::new(0), TextRange::new(9.into(), 20.into()));
//! let fix = SubstituteTextFix::delete(
//!     Some("Remove extra semicolon"),
//!     stmt,
//!     TextRange::new(10.into(), 11.into()),
//! )
//! .unwrap();
//!
//! let buffer: &mut dyn TextBuffer = &mut text;
//! assert!(fix.invoke(Some(buffer), TextSize::from(9)));
//! assert_eq!(text, "fn f() { let x = 1; }");
//! ```

use smol_str::SmolStr;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::base::constants::{DEFAULT_FIX_NAME, FIX_FAMILY_NAME};
use crate::base::{FileId, TextRange, TextSize};
use crate::hir::Declaration;

/// Errors raised while constructing a fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixError {
    /// The range handed in was not relative to the element, or overran it.
    #[error(
        "relative range {range:?} is not inside the element (length {element_len:?}); \
         pass a range relative to the element start"
    )]
    RangeOutsideElement {
        range: TextRange,
        element_len: TextSize,
    },
}

// ============================================================================
// CAPABILITIES
// ============================================================================

/// A mutable text document addressed by absolute byte offsets.
pub trait TextBuffer {
    fn text_len(&self) -> TextSize;
    fn delete_string(&mut self, start: TextSize, end: TextSize);
    fn insert_string(&mut self, offset: TextSize, text: &str);

    /// Whether `range` can be edited: inside the document and, for text
    /// with multi-byte characters, on character boundaries.
    fn is_valid_range(&self, range: TextRange) -> bool {
        range.end() <= self.text_len()
    }
}

impl TextBuffer for String {
    fn text_len(&self) -> TextSize {
        TextSize::of(self.as_str())
    }

    fn is_valid_range(&self, range: TextRange) -> bool {
        self.is_char_boundary(usize::from(range.start()))
            && self.is_char_boundary(usize::from(range.end()))
    }

    fn delete_string(&mut self, start: TextSize, end: TextSize) {
        self.replace_range(usize::from(start)..usize::from(end), "");
    }

    fn insert_string(&mut self, offset: TextSize, text: &str) {
        self.insert_str(usize::from(offset), text);
    }
}

/// An element a fix is anchored to, as seen when the fix is created.
pub trait Anchor {
    fn file_id(&self) -> FileId;
    fn text_range(&self) -> TextRange;
}

impl Anchor for Declaration {
    fn file_id(&self) -> FileId {
        self.file()
    }

    fn text_range(&self) -> TextRange {
        self.range
    }
}

/// A plain `(file, range)` element pointer.
///
/// Unlike a [`Declaration`], it does not follow its element around: an
/// [`EditHost`] resolves it to the same absolute range it was created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementPtr {
    pub file: FileId,
    pub range: TextRange,
}

impl ElementPtr {
    pub fn new(file: FileId, range: TextRange) -> Self {
        Self { file, range }
    }
}

impl Anchor for ElementPtr {
    fn file_id(&self) -> FileId {
        self.file
    }

    fn text_range(&self) -> TextRange {
        self.range
    }
}

/// Live documents and element positions a fix is applied against.
pub trait EditHost<A: ?Sized> {
    /// Current absolute range of `anchor`, or `None` if it no longer exists.
    fn element_range(&self, anchor: &A) -> Option<TextRange>;

    /// The live buffer for `file`, or `None` if it cannot be resolved.
    fn document_mut(&mut self, file: FileId) -> Option<&mut dyn TextBuffer>;
}

// ============================================================================
// FIX
// ============================================================================

/// Removes a range inside an element and places a text onto its place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstituteTextFix<A> {
    anchor: A,
    label: SmolStr,
    range_in_element: TextRange,
    substitution: Option<String>,
}

impl<A: Anchor> SubstituteTextFix<A> {
    fn new(
        label: Option<&str>,
        anchor: A,
        range_in_element: TextRange,
        substitution: Option<String>,
    ) -> Result<Self, FixError> {
        let element_len = anchor.text_range().len();
        if !TextRange::up_to(element_len).contains_range(range_in_element) {
            return Err(FixError::RangeOutsideElement {
                range: range_in_element,
                element_len,
            });
        }
        Ok(Self {
            anchor,
            label: SmolStr::new(label.unwrap_or(DEFAULT_FIX_NAME)),
            range_in_element,
            substitution,
        })
    }

    /// Delete `range_in_element` and insert nothing.
    pub fn delete(
        label: Option<&str>,
        anchor: A,
        range_in_element: TextRange,
    ) -> Result<Self, FixError> {
        Self::new(label, anchor, range_in_element, None)
    }

    /// Insert `text` at `offset_in_element`, deleting nothing.
    pub fn insert(
        label: Option<&str>,
        anchor: A,
        offset_in_element: TextSize,
        text: impl Into<String>,
    ) -> Result<Self, FixError> {
        let range = TextRange::empty(offset_in_element);
        Self::new(label, anchor, range, Some(text.into()))
    }

    /// Replace `range_in_element` with `text`.
    pub fn replace(
        label: Option<&str>,
        anchor: A,
        range_in_element: TextRange,
        text: impl Into<String>,
    ) -> Result<Self, FixError> {
        Self::new(label, anchor, range_in_element, Some(text.into()))
    }

    /// Apply the fix through `host`.
    ///
    /// The anchor's position is resolved now, not when the fix was built.
    /// Returns `false` without touching anything if the element is gone,
    /// has shrunk below the target range, or its document is unavailable.
    pub fn apply<H>(&self, host: &mut H) -> bool
    where
        H: EditHost<A> + ?Sized,
    {
        let Some(element_range) = host.element_range(&self.anchor) else {
            debug!("[FIX] '{}': anchor element no longer exists", self.label);
            return false;
        };
        if !TextRange::up_to(element_range.len()).contains_range(self.range_in_element) {
            debug!(
                "[FIX] '{}': {:?} no longer fits the element (length {:?})",
                self.label,
                self.range_in_element,
                element_range.len()
            );
            return false;
        }
        let buffer = host.document_mut(self.anchor.file_id());
        self.invoke(buffer, element_range.start())
    }
}

impl<A> SubstituteTextFix<A> {
    /// Human-facing label of this fix.
    pub fn text(&self) -> &str {
        &self.label
    }

    pub fn family_name(&self) -> &'static str {
        FIX_FAMILY_NAME
    }

    pub fn anchor(&self) -> &A {
        &self.anchor
    }

    pub fn range_in_element(&self) -> TextRange {
        self.range_in_element
    }

    pub fn substitution(&self) -> Option<&str> {
        self.substitution.as_deref()
    }

    /// Absolute range this fix edits when its element starts at `element_start`.
    pub fn absolute_range(&self, element_start: TextSize) -> TextRange {
        self.range_in_element + element_start
    }

    /// Delete the target range, then insert the substitution at its start.
    ///
    /// `buffer` is `None` when the host has no live document; the fix then
    /// does nothing. A range that runs past the end of the buffer or
    /// splits a character is also skipped. Returns whether the buffer was
    /// edited.
    pub fn invoke(&self, buffer: Option<&mut dyn TextBuffer>, element_start: TextSize) -> bool {
        let Some(buffer) = buffer else {
            debug!("[FIX] '{}': no live document, skipping", self.label);
            return false;
        };
        let range = self.absolute_range(element_start);
        if range.end() > buffer.text_len() {
            warn!(
                "[FIX] '{}': range {:?} is past the end of the document ({:?})",
                self.label,
                range,
                buffer.text_len()
            );
            return false;
        }
        if !buffer.is_valid_range(range) {
            warn!(
                "[FIX] '{}': range {:?} splits a character",
                self.label, range
            );
            return false;
        }

        trace!(
            "[FIX] '{}': delete {:?}, insert {:?}",
            self.label, range, self.substitution
        );
        buffer.delete_string(range.start(), range.end());
        if let Some(text) = &self.substitution {
            buffer.insert_string(range.start(), text);
        }
        true
    }
}

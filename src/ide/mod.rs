//! IDE features: High-level APIs for editor integrations.
//!
//! This module provides the interface between the declaration index
//! (HIR) and the editor plugin. It composes the lang-item index with
//! text-substitution fixes; neither of those depends on the other.
//!
//! ## Design Principles
//!
//! 1. **Capabilities, not host types**: documents and element positions
//!    come in through [`TextBuffer`] and [`EditHost`]
//! 2. **Snapshots**: queries run against an immutable [`Analysis`]
//!
//! ## Usage
//!
//! ```
//! use ferrule::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! let file_id = host.set_file_content(
//!     "ops.rs",
//!     "#[lang = \"add\"] trait Add {}\n#[lang = \"add\"] trait Plus {}",
//! );
//!
//! let fix = {
//!     let analysis = host.analysis();
//!     let diagnostics = analysis.diagnostics(file_id);
//!     diagnostics[0].fix.clone().unwrap()
//! };
//! assert!(host.apply_fix(&fix));
//! assert!(host.analysis().diagnostics(file_id).is_empty());
//! ```

mod analysis;
mod diagnostics;
mod fixes;

pub use analysis::{Analysis, AnalysisHost};
pub use diagnostics::{DUPLICATE_LANG_ITEM, Diagnostic, Severity, check_lang_items};
pub use fixes::{Anchor, EditHost, ElementPtr, FixError, SubstituteTextFix, TextBuffer};

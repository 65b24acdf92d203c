//! IDE layer tests
//!
//! - Text-substitution fixes against plain buffers
//! - Fixes and lang-item diagnostics through an AnalysisHost

pub mod tests_analysis;
pub mod tests_fixes;

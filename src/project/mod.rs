//! Loading source trees into an [`AnalysisHost`](crate::ide::AnalysisHost).

mod error;
pub mod file_loader;
pub mod workspace_loader;

pub use error::LoadError;
pub use file_loader::{collect_file_paths, load_file};
pub use workspace_loader::load_workspace;

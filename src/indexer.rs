//! Workspace discovery: finding translation files and loading them into a store.

/// Indexer types and errors
pub mod types;
/// Workspace walk and loading
pub mod workspace;

pub use types::{
    IndexerError,
    TranslationFile,
};
pub use workspace::{
    find_translation_files,
    load_workspace,
};

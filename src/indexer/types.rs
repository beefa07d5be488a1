//! Indexer type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::locale::LocaleKey;

/// A translation file found in the workspace and the locale it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Locale detected from the path.
    pub locale: LocaleKey,
    /// False when the file could not be read or loading stopped at a
    /// malformed entry; writing it back would lose data.
    pub complete: bool,
}

/// Failure to walk a workspace.
#[derive(Error, Debug)]
pub enum IndexerError {
    /// The workspace root is not a readable directory
    #[error("Invalid workspace path: {0}")]
    InvalidPath(String),
    /// Other generic error
    #[error("An error occurred: {0}")]
    Error(String),
}

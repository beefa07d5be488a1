//! Order snapshots: persisted order keys so placement survives across runs.

use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::store::{
    StoreError,
    TranslationItem,
    TranslationItems,
};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Failure to read, write or apply an order snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The snapshot file could not be read or written.
    #[error("Failed to access order snapshot: {0}")]
    IoError(#[from] std::io::Error),

    /// Not JSON, or not shaped like a snapshot.
    #[error("Failed to parse order snapshot: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Written by a different format version.
    #[error("Unsupported order snapshot version {0}")]
    UnsupportedVersion(u32),

    /// An item was rejected by the store on restore.
    #[error("Order snapshot contains an invalid item: {0}")]
    InvalidItem(#[from] StoreError),
}

/// Every item of every locale with its order key.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    /// Format version, [`SNAPSHOT_VERSION`] when written by this crate.
    pub version: u32,
    /// Items grouped by locale, each locale in `OriginalOrder`.
    pub items: Vec<TranslationItem>,
}

impl OrderSnapshot {
    /// Captures all locales, sorted by id, each in `OriginalOrder`.
    #[must_use]
    pub fn capture(store: &TranslationItems) -> Self {
        let items =
            store.locales().into_iter().flat_map(|locale| store.export_items(locale)).collect();
        Self { version: SNAPSHOT_VERSION, items }
    }

    /// Puts the captured items back into `store`.
    ///
    /// # Errors
    /// Returns [`SnapshotError::InvalidItem`] if an item has an empty name or
    /// a non-finite order; nothing is restored then.
    pub fn restore_into(self, store: &mut TranslationItems) -> Result<usize, SnapshotError> {
        Ok(store.import_items(self.items)?)
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot written by [`Self::to_json`].
    ///
    /// # Errors
    /// - JSON parse error
    /// - Version other than [`SNAPSHOT_VERSION`]
    pub fn from_json(json_text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json_text)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }

    /// Reads a snapshot file.
    ///
    /// # Returns
    /// - `Ok(Some(snapshot))`: the file exists and parsed
    /// - `Ok(None)`: there is no snapshot yet
    ///
    /// # Errors
    /// See [`Self::from_json`]; also fails when the file cannot be read.
    pub fn load(path: &Path) -> Result<Option<Self>, SnapshotError> {
        if !path.exists() {
            tracing::debug!("Order snapshot not found: {:?}", path);
            return Ok(None);
        }

        tracing::debug!("Loading order snapshot from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content).map(Some)
    }

    /// Writes the snapshot to `path`, replacing any previous one.
    ///
    /// # Errors
    /// Returns error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SnapshotError> {
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!(items = self.items.len(), "Saved order snapshot to: {:?}", path);
        Ok(())
    }
}

//! Data leaving the store: rendered translation files and order snapshots.
/// Translation files written from store items
pub mod render;
/// Persisted order keys
pub mod snapshot;

use thiserror::Error;

/// Errors raised by the translation item store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Item name is empty
    #[error("Translation key must not be empty")]
    InvalidKey,
    /// Source is not a flat string-to-string mapping
    #[error("Malformed translation source at '{key}': {reason}")]
    MalformedSource {
        /// Key of the offending entry.
        key: String,
        /// What is wrong with it.
        reason: String,
    },
    /// Imported item carries an order that cannot be sorted
    #[error("Invalid order value for '{key}': {value}")]
    InvalidOrder {
        /// Key of the offending item.
        key: String,
        /// The order, formatted.
        value: String,
    },
}

impl StoreError {
    /// Shorthand for [`StoreError::MalformedSource`].
    #[must_use]
    pub fn malformed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSource { key: key.into(), reason: reason.into() }
    }
}

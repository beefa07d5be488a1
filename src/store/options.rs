use serde::{
    Deserialize,
    Serialize,
};

/// Sequence in which items are handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Ascending by order key, ties broken by name.
    #[default]
    OriginalOrder,
    /// Ascending by name; order keys are ignored.
    Alphabetical,
}

/// How new keys coming from a key-value source are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadPlacement {
    /// Append after the current last item, keeping the source's own order.
    #[default]
    SourceOrder,
    /// Run every new key through best-order insertion.
    BestFit,
}

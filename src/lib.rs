//! translation-items
//!
//! Locale-keyed translation item store with best-order insertion: new keys
//! land next to their closest-named siblings and keep a stable order across
//! loads and saves.

pub mod config;
pub mod indexer;
pub mod input;
pub mod locale;
pub mod output;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use locale::LocaleKey;
pub use store::{
    SortOption,
    TranslationItem,
    TranslationItems,
};

//! Locale-keyed translation item store.
//!
//! Holds one [`TranslationItemCollection`] per [`LocaleKey`], created lazily
//! on first write. New keys get an order key from the best-order algorithm so
//! that keys sharing a naming prefix stay grouped in `OriginalOrder`.
//!
//! # Example
//!
//! ```
//! use translation_items::locale::LocaleKey;
//! use translation_items::store::{SortOption, TranslationItems};
//!
//! let en = LocaleKey::new("en", "US", "English (US)");
//! let mut items = TranslationItems::new();
//! for name in ["Menu.Open", "Menu.Save", "Dialog.Cancel"] {
//!     items.add_or_replace(&en, name, name).unwrap();
//! }
//! items.add_or_replace(&en, "Menu.Quit", "Quit").unwrap();
//!
//! let names: Vec<_> = items
//!     .ordered_items(&en, SortOption::OriginalOrder)
//!     .map(|item| item.name())
//!     .collect();
//! assert_eq!(names, ["Dialog.Cancel", "Menu.Open", "Menu.Quit", "Menu.Save"]);
//! ```

pub mod best_order;
/// Items of one locale
mod collection;
/// Store errors
mod error;
/// The item type
mod item;
/// Sort and placement options
mod options;

use std::collections::HashMap;

pub use collection::{
    AddOutcome,
    TranslationItemCollection,
};
pub use error::StoreError;
pub use item::TranslationItem;
pub use options::{
    LoadPlacement,
    SortOption,
};

use crate::locale::LocaleKey;

/// Restartable snapshot of a locale's items; clone it to iterate again.
pub type OrderedItems<'a> = std::vec::IntoIter<&'a TranslationItem>;

/// One (key, text) pair from a key-value source, or the reason it is unusable.
pub type SourceEntry = Result<(String, String), StoreError>;

/// All translation items of a session, grouped by locale.
#[derive(Debug, Clone, Default)]
pub struct TranslationItems {
    /// One collection per locale that has been written to.
    collections: HashMap<LocaleKey, TranslationItemCollection>,
    /// Placement used by [`Self::load_from_key_value_source`].
    load_placement: LoadPlacement,
}

impl TranslationItems {
    /// Empty store with `SourceOrder` loading.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that places loaded keys with `load_placement`.
    #[must_use]
    pub fn with_load_placement(load_placement: LoadPlacement) -> Self {
        Self { collections: HashMap::new(), load_placement }
    }

    /// Placement applied to keys from a key-value source.
    #[must_use]
    pub const fn load_placement(&self) -> LoadPlacement {
        self.load_placement
    }

    /// Inserts a new key at its best-order position, or replaces the text of
    /// an existing one without touching its order key.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidKey`] for an empty name.
    pub fn add_or_replace(
        &mut self,
        locale: &LocaleKey,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<AddOutcome, StoreError> {
        let result = self.collection_mut(locale).add_or_replace(locale, name, text);
        if let Err(error) = &result {
            tracing::warn!(locale = %locale.id(), %error, "Rejected translation item");
        }
        result
    }

    /// Applies every entry of `source` in order and returns how many were
    /// applied.
    ///
    /// Stops at the first bad entry. Entries applied before it stay applied.
    ///
    /// # Errors
    /// Returns the error carried by the first malformed entry, or
    /// [`StoreError::InvalidKey`] for an empty name.
    pub fn load_from_key_value_source<I>(
        &mut self,
        locale: &LocaleKey,
        source: I,
    ) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = SourceEntry>,
    {
        let placement = self.load_placement;
        let collection = self.collection_mut(locale);
        let mut applied = 0;

        for entry in source {
            let outcome =
                entry.and_then(|(name, text)| collection.place(locale, name, text, placement));
            if let Err(error) = outcome {
                tracing::warn!(locale = %locale.id(), applied, %error, "Stopped loading translations");
                return Err(error);
            }
            applied += 1;
        }

        tracing::debug!(locale = %locale.id(), applied, ?placement, "Loaded translations");
        Ok(applied)
    }

    /// Items of `locale` in the requested sequence. Unknown locales yield
    /// nothing.
    #[must_use]
    pub fn ordered_items(&self, locale: &LocaleKey, sort_option: SortOption) -> OrderedItems<'_> {
        self.collections
            .get(locale)
            .map(|collection| collection.sorted(sort_option))
            .unwrap_or_default()
            .into_iter()
    }

    /// The item named `name` in `locale`.
    #[must_use]
    pub fn get(&self, locale: &LocaleKey, name: &str) -> Option<&TranslationItem> {
        self.collections.get(locale)?.get(name)
    }

    /// Number of items stored for `locale`.
    #[must_use]
    pub fn len(&self, locale: &LocaleKey) -> usize {
        self.collections.get(locale).map_or(0, TranslationItemCollection::len)
    }

    /// Locales seen so far, sorted by id.
    #[must_use]
    pub fn locales(&self) -> Vec<&LocaleKey> {
        let mut locales: Vec<_> = self.collections.keys().collect();
        locales.sort_by_key(|locale| locale.id());
        locales
    }

    /// Removes one item; the order keys of the others are untouched.
    pub fn remove(&mut self, locale: &LocaleKey, name: &str) -> Option<TranslationItem> {
        self.collections.get_mut(locale)?.remove(name)
    }

    /// Removes every item of `locale`; the next insert starts at the base
    /// order again.
    pub fn clear_translations(&mut self, locale: &LocaleKey) {
        if let Some(collection) = self.collections.get_mut(locale) {
            collection.clear();
        }
    }

    /// Forgets every locale.
    pub fn clear_all(&mut self) {
        self.collections.clear();
    }

    /// Clones of the items of `locale` in `OriginalOrder`, order keys
    /// included.
    #[must_use]
    pub fn export_items(&self, locale: &LocaleKey) -> Vec<TranslationItem> {
        self.ordered_items(locale, SortOption::OriginalOrder).cloned().collect()
    }

    /// Restores items with the order keys they carry, overwriting items of
    /// the same locale and name.
    ///
    /// Every item is checked before any is stored.
    ///
    /// # Errors
    /// - [`StoreError::InvalidKey`] for an empty name
    /// - [`StoreError::InvalidOrder`] for a NaN or infinite order
    pub fn import_items<I>(&mut self, items: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = TranslationItem>,
    {
        let items: Vec<_> = items.into_iter().collect();
        for item in &items {
            if item.name().is_empty() {
                return Err(StoreError::InvalidKey);
            }
            if !item.order().is_finite() {
                return Err(StoreError::InvalidOrder {
                    key: item.name().to_string(),
                    value: item.order().to_string(),
                });
            }
        }

        let count = items.len();
        for item in items {
            let locale = item.locale().clone();
            self.collection_mut(&locale).restore(item);
        }
        Ok(count)
    }

    /// Collection of `locale`, created on first use.
    fn collection_mut(&mut self, locale: &LocaleKey) -> &mut TranslationItemCollection {
        self.collections.entry(locale.clone()).or_default()
    }
}

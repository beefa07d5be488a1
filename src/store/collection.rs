//! Per-locale collection of translation items.

use std::collections::HashMap;

use super::best_order::{
    insertion_index,
    order_between,
    renumbered_order,
};
use super::{
    LoadPlacement,
    SortOption,
    StoreError,
    TranslationItem,
};
use crate::locale::LocaleKey;

/// Result of an add-or-replace call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddOutcome {
    /// A new item was created with this order key.
    Inserted {
        /// Order key of the new item.
        order: f64,
    },
    /// The text of an existing item was overwritten; its order key is kept.
    Replaced {
        /// Order key the item already had.
        order: f64,
    },
}

impl AddOutcome {
    /// Order key of the affected item.
    #[must_use]
    pub const fn order(self) -> f64 {
        match self {
            Self::Inserted { order } | Self::Replaced { order } => order,
        }
    }
}

/// Items of one locale, keyed by name.
///
/// Storage order is irrelevant; the order key of each item is the only
/// source of display sequencing.
#[derive(Debug, Clone, Default)]
pub struct TranslationItemCollection {
    /// Items by name.
    items: HashMap<String, TranslationItem>,
}

impl TranslationItemCollection {
    /// Empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TranslationItem> {
        self.items.get(name)
    }

    /// Inserts `name` at its best-order position, or overwrites its text.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidKey`] for an empty name.
    pub fn add_or_replace(
        &mut self,
        locale: &LocaleKey,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<AddOutcome, StoreError> {
        self.place(locale, name.into(), text.into(), LoadPlacement::BestFit)
    }

    /// Inserts `name` after the current last item, or overwrites its text.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidKey`] for an empty name.
    pub fn append_or_replace(
        &mut self,
        locale: &LocaleKey,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<AddOutcome, StoreError> {
        self.place(locale, name.into(), text.into(), LoadPlacement::SourceOrder)
    }

    /// Inserts or replaces `name`, choosing the slot of a new key by `placement`.
    ///
    /// Renumbers the collection when no order key fits in the slot.
    pub(crate) fn place(
        &mut self,
        locale: &LocaleKey,
        name: String,
        text: String,
        placement: LoadPlacement,
    ) -> Result<AddOutcome, StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidKey);
        }

        if let Some(existing) = self.items.get_mut(&name) {
            existing.set_text(text);
            return Ok(AddOutcome::Replaced { order: existing.order() });
        }

        let (slot, order) = {
            let sorted = self.sorted(SortOption::OriginalOrder);
            let slot = match placement {
                LoadPlacement::BestFit => {
                    let names: Vec<&str> = sorted.iter().map(|item| item.name()).collect();
                    insertion_index(&names, &name)
                }
                LoadPlacement::SourceOrder => sorted.len(),
            };
            let prev = slot.checked_sub(1).and_then(|i| sorted.get(i)).map(|item| item.order());
            let next = sorted.get(slot).map(|item| item.order());
            (slot, order_between(prev, next))
        };

        let order = order.unwrap_or_else(|| self.renumber_with_gap(slot));
        tracing::debug!(locale = %locale.id(), %name, order, "Inserted translation item");

        self.items.insert(name.clone(), TranslationItem::new(locale.clone(), name, text, order));
        Ok(AddOutcome::Inserted { order })
    }

    /// Puts an item back with the order key it already carries.
    pub(crate) fn restore(&mut self, item: TranslationItem) {
        self.items.insert(item.name().to_string(), item);
    }

    /// Removes the item named `name`.
    pub fn remove(&mut self, name: &str) -> Option<TranslationItem> {
        self.items.remove(name)
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Snapshot of the items in the requested sequence.
    #[must_use]
    pub fn sorted(&self, sort_option: SortOption) -> Vec<&TranslationItem> {
        let mut items: Vec<_> = self.items.values().collect();
        match sort_option {
            SortOption::OriginalOrder => items.sort_by(|a, b| a.cmp_by_order(b)),
            SortOption::Alphabetical => items.sort_by(|a, b| a.name().cmp(b.name())),
        }
        items
    }

    /// Spreads all order keys evenly, leaving position `slot` free.
    ///
    /// Relative order is unchanged. Returns the order key for the free slot.
    fn renumber_with_gap(&mut self, slot: usize) -> f64 {
        let names: Vec<String> = self
            .sorted(SortOption::OriginalOrder)
            .into_iter()
            .map(|item| item.name().to_string())
            .collect();

        for (index, name) in names.iter().enumerate() {
            let position = if index < slot { index } else { index + 1 };
            if let Some(item) = self.items.get_mut(name) {
                item.set_order(renumbered_order(position));
            }
        }

        tracing::debug!(count = names.len(), slot, "Renumbered translation order keys");
        renumbered_order(slot)
    }
}

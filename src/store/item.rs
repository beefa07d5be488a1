//! A single translation entry.

use std::cmp::Ordering;

use serde::{
    Deserialize,
    Serialize,
};

use crate::locale::LocaleKey;

/// One key of one locale together with its text and order key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationItem {
    /// Locale the item belongs to.
    locale: LocaleKey,
    /// Translation key; never empty.
    name: String,
    /// Translated text.
    text: String,
    /// Relative position in `OriginalOrder`; not necessarily integral.
    order: f64,
}

impl TranslationItem {
    /// Builds an item; callers have already checked the name.
    #[must_use]
    pub(crate) const fn new(locale: LocaleKey, name: String, text: String, order: f64) -> Self {
        Self { locale, name, text, order }
    }

    /// Locale the item belongs to.
    #[must_use]
    pub const fn locale(&self) -> &LocaleKey {
        &self.locale
    }

    /// Translation key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Translated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Order key.
    #[must_use]
    pub const fn order(&self) -> f64 {
        self.order
    }

    /// Overwrites the text; the order key stays.
    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Moves the item, used when a collection is renumbered.
    pub(crate) const fn set_order(&mut self, order: f64) {
        self.order = order;
    }

    /// `OriginalOrder` comparison: order key first, then name.
    #[must_use]
    pub fn cmp_by_order(&self, other: &Self) -> Ordering {
        self.order.total_cmp(&other.order).then_with(|| self.name.cmp(&other.name))
    }
}

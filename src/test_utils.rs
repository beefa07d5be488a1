//! Test helpers shared by several test modules.

use crate::input::translation::parse_key_value_source;
use crate::locale::LocaleKey;
use crate::store::{
    SortOption,
    TranslationItems,
};

/// Translation file with three prefix groups, in file order.
pub(crate) const BASE_SET_JSON: &str = r#"
    {
        "AppleOrange1": "Apple Orange 1",
        "AppleOrange2": "Apple Orange 2",
        "AppleOrange3": "Apple Orange 3",
        "AppleLime1": "Apple Lime 1",
        "AppleLime3": "Apple Lime 3",
        "AppleZingzang1": "Apple Zingzang 1"
    }
"#;

pub(crate) fn en_us() -> LocaleKey {
    LocaleKey::new("en", "US", "English (US)")
}

/// Store holding `BASE_SET_JSON` for `en_US`, loaded in source order.
#[allow(clippy::expect_used)]
pub(crate) fn base_set_store() -> TranslationItems {
    let mut items = TranslationItems::new();
    let source = parse_key_value_source(BASE_SET_JSON, None);
    items.load_from_key_value_source(&en_us(), source).expect("base set is well formed");
    items
}

/// Names of `locale`'s items in the requested sequence.
pub(crate) fn ordered_names(
    items: &TranslationItems,
    locale: &LocaleKey,
    sort_option: SortOption,
) -> Vec<String> {
    items.ordered_items(locale, sort_option).map(|item| item.name().to_string()).collect()
}

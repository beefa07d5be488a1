//! Rendering ordered translation items back to JSON text.

use jsonc_parser::ParseOptions;
use jsonc_parser::cst::{
    CstInputValue,
    CstObject,
    CstRootNode,
};

use std::collections::HashSet;

use crate::store::TranslationItem;

/// Render items as a JSON object, keys in the order given.
///
/// With a `nest_separator`, keys are split into nested objects
/// (`menu.open` → `{"menu": {"open": ..}}`); objects appear where their first
/// key appears. When a prefix of a key is itself a key (`menu` and
/// `menu.open`), the longer key stays flat below the last free object, so
/// flattening the output again yields every key exactly once.
///
/// Returns `None` only if the CST cannot be built.
#[must_use]
pub fn render_translation_json<'a, I>(items: I, nest_separator: Option<&str>) -> Option<String>
where
    I: IntoIterator<Item = &'a TranslationItem>,
{
    let root = CstRootNode::parse("{}", &ParseOptions::default()).ok()?;
    let root_obj = root.object_value_or_set();
    let items: Vec<&TranslationItem> = items.into_iter().collect();

    match nest_separator {
        Some(separator) => {
            let names: HashSet<&str> = items.iter().map(|item| item.name()).collect();
            for item in &items {
                append_nested(&root_obj, item, separator, &names);
            }
        }
        None => {
            for item in &items {
                root_obj.append(item.name(), CstInputValue::String(item.text().to_string()));
            }
        }
    }

    Some(root.to_string())
}

/// Appends `item` below the objects named by its key parts.
///
/// Descends only through prefixes that are not keys themselves; the rest of
/// the key is appended flat where descent stops.
fn append_nested(
    root_obj: &CstObject,
    item: &TranslationItem,
    separator: &str,
    names: &HashSet<&str>,
) {
    let value = CstInputValue::String(item.text().to_string());
    let parts: Vec<&str> = item.name().split(separator).collect();
    let Some((last, parents)) = parts.split_last() else {
        return;
    };

    let mut current_obj = root_obj.clone();
    for (depth, part) in parents.iter().enumerate() {
        let prefix = parts.get(..=depth).map(|prefix| prefix.join(separator)).unwrap_or_default();
        if names.contains(prefix.as_str()) {
            let rest = parts.get(depth..).map(|rest| rest.join(separator)).unwrap_or_default();
            current_obj.append(&rest, value);
            return;
        }
        current_obj = current_obj.object_value_or_set(part);
    }

    current_obj.append(last, value);
}

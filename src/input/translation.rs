//! Translation file input: JSON key-value sources and locale detection.

use std::path::Path;

use serde_json::{
    Map,
    Value,
};

use crate::locale::LocaleKey;
use crate::store::{
    SourceEntry,
    StoreError,
};

/// Key reported when the document itself cannot be used.
const DOCUMENT_KEY: &str = "<document>";

/// Detect the locale from a file path heuristically.
///
/// Splits the path by '/' and '.', then searches backwards for a part that
/// parses as a locale id.
///
/// # Examples
/// - `locales/en_US.json` → `en_US`
/// - `messages/ja-JP.json` → `ja_JP`
/// - `translations/de_DE/common.json` → `de_DE`
/// - `locales/en.json` → `None` (no region)
#[must_use]
pub fn detect_locale_from_path(file_path: &Path) -> Option<LocaleKey> {
    let path_str = file_path.to_string_lossy();
    path_str.split(['/', '\\', '.']).rev().find_map(LocaleKey::parse_id)
}

/// Turn a JSON document into key-value source entries, in document order.
///
/// The document must be an object whose values are strings. With a
/// `flatten_separator`, nested objects are flattened into joined keys
/// (`{"menu": {"open": ".."}}` → `menu.open`); without one they are
/// malformed. Anything unusable becomes an `Err` entry at its position, so
/// a loader applies everything before it.
///
/// # Examples
/// ```
/// use translation_items::input::translation::parse_key_value_source;
///
/// let entries = parse_key_value_source(r#"{"b": "B", "menu": {"a": "A"}}"#, Some("."));
/// let pairs: Vec<_> = entries.into_iter().map(Result::unwrap).collect();
/// assert_eq!(pairs[0], ("b".to_string(), "B".to_string()));
/// assert_eq!(pairs[1], ("menu.a".to_string(), "A".to_string()));
/// ```
#[must_use]
pub fn parse_key_value_source(
    json_text: &str,
    flatten_separator: Option<&str>,
) -> Vec<SourceEntry> {
    let json: Value = match serde_json::from_str(json_text) {
        Ok(json) => json,
        Err(e) => {
            let reason = format!("Failed to parse JSON: {e}");
            return vec![Err(StoreError::malformed(DOCUMENT_KEY, reason))];
        }
    };

    let Value::Object(map) = json else {
        return vec![Err(StoreError::malformed(
            DOCUMENT_KEY,
            format!("expected an object of strings, found {}", kind_of(&json)),
        ))];
    };

    let mut entries = Vec::with_capacity(map.len());
    collect_entries(&map, flatten_separator, None, &mut entries);
    entries
}

/// Pushes the entries of `map` in file order, descending into objects when
/// `separator` is set.
fn collect_entries(
    map: &Map<String, Value>,
    separator: Option<&str>,
    prefix: Option<&str>,
    entries: &mut Vec<SourceEntry>,
) {
    for (key, value) in map {
        let full_key = match (prefix, separator) {
            (Some(p), Some(sep)) => format!("{p}{sep}{key}"),
            _ => key.clone(),
        };

        match value {
            Value::String(text) => entries.push(Ok((full_key, text.clone()))),
            Value::Object(nested) if separator.is_some() => {
                collect_entries(nested, separator, Some(&full_key), entries);
            }
            Value::Object(_) => entries.push(Err(StoreError::malformed(
                full_key,
                "nested objects are not allowed unless flattening is enabled",
            ))),
            other => entries.push(Err(StoreError::malformed(
                full_key,
                format!("expected a string value, found {}", kind_of(other)),
            ))),
        }
    }
}

/// JSON type name used in error messages.
const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read a translation file into key-value source entries.
///
/// # Errors
/// Returns error if the file cannot be read. Parse problems are reported as
/// entries, see [`parse_key_value_source`].
pub fn load_translation_file(
    file_path: &Path,
    flatten_separator: Option<&str>,
) -> Result<Vec<SourceEntry>, std::io::Error> {
    let content = std::fs::read_to_string(file_path)?;
    Ok(parse_key_value_source(&content, flatten_separator))
}

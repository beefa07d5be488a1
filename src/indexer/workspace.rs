//! Walks a workspace for translation files and loads them.

use std::collections::{
    HashMap,
    HashSet,
};
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;

use crate::config::{
    FileMatcher,
    I18nSettings,
};
use crate::indexer::types::{
    IndexerError,
    TranslationFile,
};
use crate::input::translation::{
    detect_locale_from_path,
    load_translation_file,
};
use crate::locale::LocaleKey;
use crate::store::{
    SortOption,
    TranslationItems,
};

/// Find every translation file under the matcher's workspace root.
///
/// Honours `.gitignore`, the global gitignore and `.git/info/exclude`.
/// Paths come back sorted so loading is deterministic.
#[must_use]
pub fn find_translation_files(matcher: &FileMatcher) -> Vec<PathBuf> {
    let workspace_path = matcher.workspace_root();
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(workspace_path)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(workspace_path) else {
            continue;
        };
        if !matcher.is_translation_file(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    found_files
}

/// Load every translation file of the workspace at `root` into `store`.
///
/// Items already in the store (e.g. restored from an order snapshot) keep
/// their order keys; items of a loaded locale that no file mentions anymore
/// are removed. Files without a detectable locale are skipped with a warning.
/// Unreadable files and files with a malformed entry are returned with
/// `complete == false`, and their locale keeps every stored item.
///
/// # Errors
/// - `root` is not a directory
/// - the configured patterns do not compile
pub fn load_workspace(
    root: &Path,
    settings: &I18nSettings,
    store: &mut TranslationItems,
) -> Result<Vec<TranslationFile>, IndexerError> {
    if !root.is_dir() {
        return Err(IndexerError::InvalidPath(root.display().to_string()));
    }
    tracing::debug!(workspace_path = %root.display(), "Loading workspace");

    let matcher = FileMatcher::new(root.to_path_buf(), settings)
        .map_err(|e| IndexerError::Error(e.to_string()))?;

    let mut loaded = Vec::new();
    let mut seen: HashMap<LocaleKey, HashSet<String>> = HashMap::new();
    let mut incomplete: HashSet<LocaleKey> = HashSet::new();

    for path in find_translation_files(&matcher) {
        let Some(locale) = detect_locale_from_path(&path) else {
            tracing::warn!("Skipping file without a locale in its path: {:?}", path);
            continue;
        };
        let locale = match settings.locale_names.get(&locale.id()) {
            Some(name) => locale.with_display_name(name),
            None => locale,
        };

        let names = seen.entry(locale.clone()).or_default();
        let complete = load_file(&path, &locale, settings, store, names);
        if !complete {
            incomplete.insert(locale.clone());
        }
        loaded.push(TranslationFile { path, locale, complete });
    }

    for (locale, names) in &seen {
        if incomplete.contains(locale) {
            tracing::warn!(locale = %locale.id(), "Keeping stored items of a partly loaded locale");
            continue;
        }
        prune_missing(store, locale, names);
    }

    Ok(loaded)
}

/// Loads one file into `store` and records every well-formed key in `names`.
///
/// Returns whether every entry of the file was loaded.
fn load_file(
    path: &Path,
    locale: &LocaleKey,
    settings: &I18nSettings,
    store: &mut TranslationItems,
    names: &mut HashSet<String>,
) -> bool {
    let entries = match load_translation_file(path, settings.flatten_separator()) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to read file {:?}: {}", path, e);
            return false;
        }
    };

    names.extend(
        entries.iter().filter_map(|entry| entry.as_ref().ok()).map(|(name, _)| name.clone()),
    );

    match store.load_from_key_value_source(locale, entries) {
        Ok(count) => {
            tracing::debug!(count, locale = %locale.id(), "Loaded {:?}", path);
            true
        }
        Err(e) => {
            tracing::warn!("Stopped loading {:?}: {}", path, e);
            false
        }
    }
}

/// Removes items of `locale` whose key is not in `keep`.
fn prune_missing(store: &mut TranslationItems, locale: &LocaleKey, keep: &HashSet<String>) {
    let stale: Vec<String> = store
        .ordered_items(locale, SortOption::OriginalOrder)
        .filter(|item| !keep.contains(item.name()))
        .map(|item| item.name().to_string())
        .collect();

    for name in stale {
        tracing::debug!(locale = %locale.id(), name = %name, "Removing item missing from files");
        store.remove(locale, &name);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{
        BASE_SET_JSON,
        en_us,
        ordered_names,
    };

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relative_paths(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[rstest]
    fn finds_translation_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "locales/en_US.json", "{}");
        write(root, "locales/ja_JP.json", "{}");
        write(root, "src/messages/de_DE.json", "{}");
        write(root, "package.json", "{}");
        write(root, "node_modules/pkg/locales/en_US.json", "{}");

        let matcher = FileMatcher::new(root.to_path_buf(), &I18nSettings::default()).unwrap();
        let files = find_translation_files(&matcher);

        assert_eq!(
            relative_paths(root, &files),
            vec!["locales/en_US.json", "locales/ja_JP.json", "src/messages/de_DE.json"]
        );
    }

    #[rstest]
    fn respects_gitignore() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        // `ignore` only reads .gitignore inside a git repository.
        fs::create_dir_all(root.join(".git")).unwrap();
        write(root, ".gitignore", "build/\n");
        write(root, "locales/en_US.json", "{}");
        write(root, "build/locales/en_US.json", "{}");

        let matcher = FileMatcher::new(root.to_path_buf(), &I18nSettings::default()).unwrap();
        let files = find_translation_files(&matcher);

        assert_eq!(relative_paths(root, &files), vec!["locales/en_US.json"]);
    }

    #[googletest::test]
    fn load_workspace_loads_files_by_locale() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "locales/en_US.json", BASE_SET_JSON);
        write(root, "locales/ja-JP.json", r#"{"hello": "こんにちは"}"#);
        write(root, "locales/common.json", r#"{"ignored": "x"}"#);

        let mut store = TranslationItems::new();
        let files = load_workspace(root, &I18nSettings::default(), &mut store).unwrap();

        expect_that!(files.len(), eq(2));
        expect_that!(store.len(&en_us()), eq(6));
        expect_that!(
            ordered_names(&store, &en_us(), SortOption::OriginalOrder).first(),
            some(eq("AppleOrange1"))
        );
        let ja = LocaleKey::parse_id("ja_JP").unwrap();
        expect_that!(store.get(&ja, "hello").map(|item| item.text()), some(eq("こんにちは")));
    }

    #[googletest::test]
    fn load_workspace_applies_locale_names_and_flattening() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "locales/en_US.json", r#"{"menu": {"open": "Open"}}"#);
        let settings = I18nSettings {
            flatten_nested: true,
            locale_names: HashMap::from([("en_US".to_string(), "English (US)".to_string())]),
            ..I18nSettings::default()
        };

        let mut store = TranslationItems::new();
        let files = load_workspace(root, &settings, &mut store).unwrap();

        expect_that!(files.first().map(|f| f.locale.display_name()), some(eq("English (US)")));
        expect_that!(store.get(&en_us(), "menu.open").map(|item| item.text()), some(eq("Open")));
    }

    #[googletest::test]
    fn load_workspace_keeps_existing_orders_and_prunes_missing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "locales/en_US.json", r#"{"b": "B2", "a": "A2"}"#);

        let mut store = TranslationItems::new();
        store.add_or_replace(&en_us(), "a", "A").unwrap();
        store.add_or_replace(&en_us(), "b", "B").unwrap();
        store.add_or_replace(&en_us(), "gone", "G").unwrap();
        load_workspace(root, &I18nSettings::default(), &mut store).unwrap();

        expect_that!(
            ordered_names(&store, &en_us(), SortOption::OriginalOrder),
            elements_are![eq("a"), eq("b")]
        );
        expect_that!(store.get(&en_us(), "b").map(|item| item.text()), some(eq("B2")));
    }

    #[googletest::test]
    fn load_workspace_keeps_items_after_malformed_entry() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "locales/en_US.json", r#"{"first": "1", "bad": 2, "last": "3"}"#);

        let mut store = TranslationItems::new();
        store.add_or_replace(&en_us(), "first", "old").unwrap();
        store.add_or_replace(&en_us(), "last", "3").unwrap();
        store.add_or_replace(&en_us(), "removed", "x").unwrap();
        let files = load_workspace(root, &I18nSettings::default(), &mut store).unwrap();

        expect_that!(files.iter().map(|f| f.complete).collect::<Vec<_>>(), elements_are![eq(&false)]);
        expect_that!(
            ordered_names(&store, &en_us(), SortOption::OriginalOrder),
            elements_are![eq("first"), eq("last"), eq("removed")]
        );
        expect_that!(store.get(&en_us(), "first").map(|item| item.text()), some(eq("1")));
    }

    #[googletest::test]
    fn load_workspace_marks_well_formed_files_complete() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "locales/en_US.json", r#"{"first": "1"}"#);
        write(root, "locales/de_DE.json", r#"{"first": "1", "bad": null}"#);

        let mut store = TranslationItems::new();
        let files = load_workspace(root, &I18nSettings::default(), &mut store).unwrap();

        let flags: Vec<(String, bool)> =
            files.iter().map(|f| (f.locale.id(), f.complete)).collect();
        expect_that!(
            flags,
            elements_are![eq(&("de_DE".to_string(), false)), eq(&("en_US".to_string(), true))]
        );
    }

    #[rstest]
    fn load_workspace_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let mut store = TranslationItems::new();
        let result = load_workspace(&missing, &I18nSettings::default(), &mut store);

        assert!(matches!(result, Err(IndexerError::InvalidPath(_))));
    }
}

//! Command-line front end: load a workspace's translation files, add keys in
//! their best position, print them, and optionally write them back.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;

use clap::{
    Parser,
    ValueEnum,
};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use translation_items::config::{
    ConfigError,
    ConfigManager,
};
use translation_items::indexer::{
    IndexerError,
    TranslationFile,
    load_workspace,
};
use translation_items::output::render::render_translation_json;
use translation_items::output::snapshot::{
    OrderSnapshot,
    SnapshotError,
};
use translation_items::store::StoreError;
use translation_items::{
    LocaleKey,
    SortOption,
    TranslationItems,
};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "translation-items",
    version,
    about = "Keep translation keys in a stable, prefix-grouped order",
    long_about = None
)]
struct Cli {
    /// Workspace root
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Display order (defaults to `defaultSort` from the configuration)
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Add or replace a key, e.g. `en_US:menu.open=Open`
    #[arg(long = "add", value_name = "LOCALE:KEY=TEXT", value_parser = parse_addition)]
    additions: Vec<Addition>,

    /// Write translation files and the order snapshot back
    #[arg(long)]
    write: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// `--sort` values.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// Order keys, as stored.
    Original,
    /// Key names, ordinal.
    Alphabetical,
}

impl From<SortArg> for SortOption {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Original => Self::OriginalOrder,
            SortArg::Alphabetical => Self::Alphabetical,
        }
    }
}

/// One `--add` argument.
#[derive(Debug, Clone)]
struct Addition {
    /// Target locale.
    locale: LocaleKey,
    /// Key name.
    name: String,
    /// Translated text.
    text: String,
}

/// Parses `LOCALE:KEY=TEXT`; the text may contain `=` and `:`.
fn parse_addition(value: &str) -> Result<Addition, String> {
    let (locale_id, rest) =
        value.split_once(':').ok_or_else(|| "expected LOCALE:KEY=TEXT".to_string())?;
    let (name, text) = rest.split_once('=').ok_or_else(|| "expected KEY=TEXT".to_string())?;
    let locale =
        LocaleKey::parse_id(locale_id).ok_or_else(|| format!("invalid locale id '{locale_id}'"))?;
    if name.is_empty() {
        return Err("key cannot be empty".to_string());
    }
    Ok(Addition { locale, name: name.to_string(), text: text.to_string() })
}

/// Anything that ends a run with a failure exit code.
#[derive(Error, Debug)]
enum CliError {
    /// Unreadable or invalid `.translation-items.json`.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The workspace could not be walked.
    #[error(transparent)]
    Indexer(#[from] IndexerError),

    /// The order snapshot could not be read, restored or saved.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// An `--add` was rejected.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A translation file could not be written.
    #[error("Failed to write {path:?}: {source}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Parses arguments, runs, and maps the outcome to an exit code.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the fmt subscriber; the returned guard flushes the log file on drop.
fn init_tracing(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(path) = log_file else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        return None;
    };

    let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name =
        path.file_name().map_or_else(|| "translation-items.log".into(), ToOwned::to_owned);
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(writer).with_ansi(false).init();
    Some(guard)
}

/// Loads the workspace, applies `--add`, prints, and writes on `--write`.
fn run(cli: &Cli) -> Result<(), CliError> {
    let config_manager = ConfigManager::load(cli.root.clone())?;
    let settings = config_manager.settings();

    let mut store = TranslationItems::with_load_placement(settings.load_placement);

    let order_file = config_manager.order_file_path();
    if let Some(snapshot) = OrderSnapshot::load(&order_file)? {
        let count = snapshot.restore_into(&mut store)?;
        tracing::debug!(count, "Restored order snapshot");
    }

    let files = load_workspace(config_manager.workspace_root(), settings, &mut store)?;
    tracing::info!(files = files.len(), "Loaded translation files");

    for addition in &cli.additions {
        let outcome = store.add_or_replace(&addition.locale, &addition.name, &addition.text)?;
        tracing::info!(
            locale = %addition.locale.id(),
            name = %addition.name,
            order = outcome.order(),
            "Added translation"
        );
    }

    let sort_option = cli.sort.map_or(settings.default_sort, SortOption::from);
    print_items(&store, sort_option);

    if cli.write {
        write_files(&store, &files, settings.flatten_separator())?;
        OrderSnapshot::capture(&store).save(&order_file)?;
    }

    Ok(())
}

/// Prints every locale and its items in `sort_option` order.
#[allow(clippy::print_stdout)]
fn print_items(store: &TranslationItems, sort_option: SortOption) {
    for locale in store.locales() {
        println!("{locale}");
        for item in store.ordered_items(locale, sort_option) {
            println!("  {} = {}", item.name(), item.text());
        }
    }
}

/// Writes each locale back to its file in `OriginalOrder`.
///
/// Locales spread over several files, with no file at all, or whose file
/// did not load completely are left alone.
fn write_files(
    store: &TranslationItems,
    files: &[TranslationFile],
    nest_separator: Option<&str>,
) -> Result<(), CliError> {
    let mut by_locale: HashMap<&LocaleKey, Vec<&TranslationFile>> = HashMap::new();
    for file in files {
        by_locale.entry(&file.locale).or_default().push(file);
    }

    for locale in store.locales() {
        let path = match by_locale.get(locale).map(Vec::as_slice) {
            Some([file]) if !file.complete => {
                tracing::warn!(
                    locale = %locale.id(),
                    "Not writing {:?}: it did not load completely",
                    file.path
                );
                continue;
            }
            Some([file]) => file.path.as_path(),
            Some(paths) => {
                tracing::warn!(
                    locale = %locale.id(),
                    files = paths.len(),
                    "Not writing a locale split over several files"
                );
                continue;
            }
            None => {
                tracing::warn!(locale = %locale.id(), "No translation file to write to");
                continue;
            }
        };

        let items = store.ordered_items(locale, SortOption::OriginalOrder);
        let Some(text) = render_translation_json(items, nest_separator) else {
            tracing::warn!(locale = %locale.id(), "Failed to render translations");
            continue;
        };

        std::fs::write(path, text + "\n")
            .map_err(|source| CliError::Write { path: path.to_path_buf(), source })?;
        tracing::info!("Wrote {:?}", path);
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn en_us() -> LocaleKey {
        LocaleKey::parse_id("en_US").unwrap()
    }

    fn store_with_new_key() -> TranslationItems {
        let mut store = TranslationItems::new();
        store.add_or_replace(&en_us(), "first", "1").unwrap();
        store.add_or_replace(&en_us(), "first2", "2").unwrap();
        store
    }

    #[rstest]
    #[case::complete(true, &["first", "first2"])]
    #[case::stopped_loading(false, &["first", "bad", "last"])]
    fn write_files_only_rewrites_completely_loaded_files(
        #[case] complete: bool,
        #[case] expected_keys: &[&str],
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en_US.json");
        fs::write(&path, r#"{"first": "1", "bad": 2, "last": "3"}"#).unwrap();
        let files = vec![TranslationFile { path: path.clone(), locale: en_us(), complete }];

        write_files(&store_with_new_key(), &files, None).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, expected_keys);
    }

    #[googletest::test]
    fn write_files_skips_locale_split_over_files() {
        let temp_dir = TempDir::new().unwrap();
        let files: Vec<TranslationFile> = ["a/en_US.json", "b/en_US.json"]
            .into_iter()
            .map(|relative| TranslationFile {
                path: temp_dir.path().join(relative),
                locale: en_us(),
                complete: true,
            })
            .collect();

        write_files(&store_with_new_key(), &files, None).unwrap();

        expect_that!(files.iter().filter(|f| f.path.exists()).count(), eq(0));
    }

    #[rstest]
    #[case("en_US:menu.open=Open", "menu.open", "Open")]
    #[case("ja_JP:a=b=c", "a", "b=c")]
    fn parse_addition_splits_locale_key_and_text(
        #[case] value: &str,
        #[case] name: &str,
        #[case] text: &str,
    ) {
        let addition = parse_addition(value).unwrap();

        assert_eq!((addition.name.as_str(), addition.text.as_str()), (name, text));
    }

    #[rstest]
    #[case("menu.open=Open")]
    #[case("en_US:menu.open")]
    #[case("en_US:=Open")]
    #[case("english:menu.open=Open")]
    fn parse_addition_rejects_malformed_values(#[case] value: &str) {
        assert!(parse_addition(value).is_err());
    }
}

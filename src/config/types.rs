use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::store::{
    LoadPlacement,
    SortOption,
};

/// One invalid setting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "translationFiles.includePatterns[0]")
    pub field_path: String,
    /// What to change.
    pub message: String,
}

impl ValidationError {
    /// Error for the field at `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Why the configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Every setting that failed validation.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The file exists but could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid JSON for the settings.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered list, one error per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `.translation-items.json`; missing fields take defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Which files are translation files.
    pub translation_files: TranslationFilesConfig,

    /// Excluded from every walk, on top of `.gitignore`.
    pub exclude_patterns: Vec<String>,

    /// Joins key parts, e.g. `.` in `menu.open`.
    pub key_separator: String,

    /// Flatten nested objects into `keySeparator`-joined keys when loading,
    /// and nest them again when writing.
    pub flatten_nested: bool,

    /// Placement of keys read from files.
    pub load_placement: LoadPlacement,
    /// Display order when no `--sort` is given.
    pub default_sort: SortOption,

    /// Order snapshot path, relative to the workspace root.
    pub order_file: String,

    /// Display names by locale id (e.g. `"en_US": "English (US)"`).
    pub locale_names: HashMap<String, String>,
}

/// `translationFiles` section.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    /// Globs a translation file must match, relative to the workspace root.
    pub include_patterns: Vec<String>,
    /// Globs that rule a matching file out again.
    pub exclude_patterns: Vec<String>,
}

impl I18nSettings {
    /// Separator used for flattening, if enabled.
    #[must_use]
    pub fn flatten_separator(&self) -> Option<&str> {
        self.flatten_nested.then_some(self.key_separator.as_str())
    }

    /// Checks every setting and reports all problems at once.
    ///
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Invalid separator
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.translation_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/locales/*.json\"]",
            ));
        }

        validate_globs(
            "translationFiles.includePatterns",
            &self.translation_files.include_patterns,
            &mut errors,
        );
        validate_globs(
            "translationFiles.excludePatterns",
            &self.translation_files.exclude_patterns,
            &mut errors,
        );
        validate_globs("excludePatterns", &self.exclude_patterns, &mut errors);

        if self.order_file.is_empty() {
            errors.push(ValidationError::new(
                "orderFile",
                "The path cannot be empty. Example: \".translation-order.json\"",
            ));
        }

        for (id, name) in &self.locale_names {
            if name.is_empty() {
                errors.push(ValidationError::new(
                    format!("localeNames.{id}"),
                    "The display name cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Records each pattern of `field` that does not compile.
fn validate_globs(field: &str, patterns: &[String], errors: &mut Vec<ValidationError>) {
    for (index, pattern) in patterns.iter().enumerate() {
        if let Err(e) = globset::Glob::new(pattern) {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                format!("Invalid glob pattern '{pattern}': {e}"),
            ));
        }
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/{locales,messages}/**/*.json".to_string()],
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            translation_files: TranslationFilesConfig::default(),
            exclude_patterns: vec!["node_modules/**".to_string()],
            key_separator: ".".to_string(),
            flatten_nested: false,
            load_placement: LoadPlacement::default(),
            default_sort: SortOption::default(),
            order_file: ".translation-order.json".to_string(),
            locale_names: HashMap::new(),
        }
    }
}

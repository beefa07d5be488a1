//! Reads `.translation-items.json` at a workspace root and keeps the
//! validated result next to the root it came from.

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    I18nSettings,
};

/// Name of the configuration file at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".translation-items.json";

/// Validated settings of one workspace.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Settings read from the workspace, or the defaults.
    settings: I18nSettings,
    /// Root the settings were read from; relative paths resolve against it.
    workspace_root: PathBuf,
}

impl ConfigManager {
    /// Load and validate the settings of `workspace_root`.
    ///
    /// A workspace without a configuration file gets the defaults.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load(workspace_root: PathBuf) -> Result<Self, ConfigError> {
        let settings = read_settings(&workspace_root)?.unwrap_or_default();
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!(workspace_path = %workspace_root.display(), "Settings: {:?}", settings);

        Ok(Self { settings, workspace_root })
    }

    /// The validated settings.
    #[must_use]
    pub const fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    /// Root the settings were read from.
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// `orderFile` resolved against the workspace root.
    #[must_use]
    pub fn order_file_path(&self) -> PathBuf {
        self.workspace_root.join(&self.settings.order_file)
    }
}

/// Parses the configuration file, or `Ok(None)` when the workspace has none.
fn read_settings(workspace_root: &Path) -> Result<Option<I18nSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);
    let content = std::fs::read_to_string(&config_path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::store::{
        LoadPlacement,
        SortOption,
    };

    fn workspace_with_config(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();
        temp_dir
    }

    #[rstest]
    fn load_reads_config_file() {
        let temp_dir = workspace_with_config(
            r#"{"defaultSort": "alphabetical", "loadPlacement": "bestFit", "orderFile": "order.json"}"#,
        );

        let manager = ConfigManager::load(temp_dir.path().to_path_buf()).unwrap();

        assert_eq!(manager.settings().default_sort, SortOption::Alphabetical);
        assert_eq!(manager.settings().load_placement, LoadPlacement::BestFit);
        assert_eq!(manager.workspace_root(), temp_dir.path());
        assert_eq!(manager.order_file_path(), temp_dir.path().join("order.json"));
    }

    #[rstest]
    fn load_without_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let manager = ConfigManager::load(temp_dir.path().to_path_buf()).unwrap();

        assert_eq!(manager.settings().key_separator, ".");
        assert_eq!(manager.order_file_path(), temp_dir.path().join(".translation-order.json"));
    }

    #[rstest]
    fn load_rejects_invalid_json() {
        let temp_dir = workspace_with_config("invalid json");

        let result = ConfigManager::load(temp_dir.path().to_path_buf());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[rstest]
    fn load_rejects_invalid_settings() {
        let temp_dir = workspace_with_config(r#"{"keySeparator": "", "orderFile": ""}"#);

        let result = ConfigManager::load(temp_dir.path().to_path_buf());

        let Err(ConfigError::ValidationErrors(errors)) = result else {
            panic!("expected validation errors");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field_path.as_str()).collect();
        assert_eq!(fields, vec!["keySeparator", "orderFile"]);
    }

    #[rstest]
    fn load_rejects_unreadable_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let result = ConfigManager::load(temp_dir.path().to_path_buf());

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}

//! File pattern matcher for translation files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::I18nSettings;

/// A configured glob that does not compile.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    /// Entry of `excludePatterns` or `translationFiles.excludePatterns`.
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The pattern as configured.
        pattern: String,
        /// Why globset rejected it.
        #[source]
        source: globset::Error,
    },

    /// Entry of `translationFiles.includePatterns`.
    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidTranslationPattern {
        /// The pattern as configured.
        pattern: String,
        /// Why globset rejected it.
        #[source]
        source: globset::Error,
    },

    /// The compiled globs could not be combined.
    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Decides which files under a workspace root are translation files.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    /// Directory the walk starts from.
    workspace_root: PathBuf,
    /// `excludePatterns`, applied to every file.
    exclude_set: GlobSet,
    /// `translationFiles.includePatterns`.
    translation_set: GlobSet,
    /// `translationFiles.excludePatterns`.
    translation_exclude_set: GlobSet,
}

impl FileMatcher {
    /// Compiles the patterns of `settings` for the workspace at `workspace_root`.
    ///
    /// # Errors
    /// Returns the first pattern that does not compile.
    pub fn new(workspace_root: PathBuf, settings: &I18nSettings) -> Result<Self, MatcherError> {
        let exclude_set = Self::build_glob_set(&settings.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        let translation_set = Self::build_glob_set(
            &settings.translation_files.include_patterns,
            |pattern, source| MatcherError::InvalidTranslationPattern { pattern, source },
        )?;

        let translation_exclude_set = Self::build_glob_set(
            &settings.translation_files.exclude_patterns,
            |pattern, source| MatcherError::InvalidExcludePattern { pattern, source },
        )?;

        Ok(Self { workspace_root, exclude_set, translation_set, translation_exclude_set })
    }

    /// Compiles `patterns` into one set, reporting a bad pattern through `make_error`.
    fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, MatcherError>
    where
        F: Fn(String, globset::Error) -> MatcherError,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
            builder.add(glob);
        }
        Ok(builder.build()?)
    }

    /// Directory the walk starts from.
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Whether `relative_path` matches `translationFiles.includePatterns`
    /// and neither exclude list.
    ///
    /// The path is relative to the workspace root, as the walk yields it.
    #[must_use]
    pub fn is_translation_file(&self, relative_path: &Path) -> bool {
        self.translation_set.is_match(relative_path)
            && !self.exclude_set.is_match(relative_path)
            && !self.translation_exclude_set.is_match(relative_path)
    }
}

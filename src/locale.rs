//! Locale identity used to key per-locale translation collections.

use std::fmt;
use std::hash::{
    Hash,
    Hasher,
};

use serde::{
    Deserialize,
    Serialize,
};

/// Identifies a translation target, e.g. `en_US` / "English (US)".
///
/// Equality and hashing only look at `language` and `region`; the display
/// name is informational.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleKey {
    /// Lowercase language code, e.g. `en`.
    language: String,
    /// Uppercase region code or three-digit area, e.g. `US` or `419`.
    region: String,
    /// Name shown to users.
    display_name: String,
}

impl LocaleKey {
    /// Builds a key from its parts as given; no case folding.
    #[must_use]
    pub fn new(
        language: impl Into<String>,
        region: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            region: region.into(),
            display_name: display_name.into(),
        }
    }

    /// Parses a locale id such as `en_US`, `en-US`, `fil_PH` or `es_419`.
    ///
    /// The id itself becomes the display name.
    ///
    /// # Examples
    /// ```
    /// use translation_items::locale::LocaleKey;
    ///
    /// let locale = LocaleKey::parse_id("pt-BR").unwrap();
    /// assert_eq!(locale.language(), "pt");
    /// assert_eq!(locale.region(), "BR");
    /// assert_eq!(locale.id(), "pt_BR");
    /// ```
    #[must_use]
    pub fn parse_id(id: &str) -> Option<Self> {
        let (language, region) = id.split_once(['_', '-'])?;

        let language_ok =
            (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());
        let region_ok = (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
            || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit()));

        if !language_ok || !region_ok {
            return None;
        }

        Some(Self::new(language.to_ascii_lowercase(), region.to_ascii_uppercase(), id))
    }

    /// Returns a copy with a different display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region code.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Name shown to users.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Canonical id in the form `{language}_{region}`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}_{}", self.language, self.region)
    }

    /// True when display name, language and region are all filled in.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.display_name.is_empty() && !self.language.is_empty() && !self.region.is_empty()
    }
}

impl PartialEq for LocaleKey {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && self.region == other.region
    }
}

impl Hash for LocaleKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.language.hash(state);
        self.region.hash(state);
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Name='{}', Language='{}', Region='{}']",
            self.display_name, self.language, self.region
        )
    }
}

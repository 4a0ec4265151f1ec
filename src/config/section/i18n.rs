//! `[i18n]` configuration.
//!
//! Even single-language sites carry this section: the default locale is
//! used as the `html lang` attribute by the downstream build.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "zh-Hans"]
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Locale configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used when no locale prefix is present in the URL.
    pub default_locale: String,

    /// All locales the site is built for.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

/// Field paths for `[i18n]`.
pub struct I18nFields {
    pub default_locale: FieldPath,
    pub locales: FieldPath,
}

impl I18nConfig {
    pub const FIELDS: I18nFields = I18nFields {
        default_locale: FieldPath::new("i18n.default_locale"),
        locales: FieldPath::new("i18n.locales"),
    };

    /// Validate locale settings.
    ///
    /// # Checks
    /// - `locales` must be non-empty, with no empty codes or duplicates
    /// - `default_locale` must be a member of `locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.locales.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.locales,
                "locale list must not be empty",
                "add at least the default locale, e.g.: locales = [\"en\"]",
            );
            return;
        }

        let mut seen = FxHashSet::default();
        for locale in &self.locales {
            if locale.is_empty() {
                diag.error(Self::FIELDS.locales, "locale codes must not be empty");
            } else if !seen.insert(locale.as_str()) {
                diag.error(
                    Self::FIELDS.locales,
                    format!("duplicate locale '{locale}'"),
                );
            }
        }

        if !self.locales.contains(&self.default_locale) {
            diag.error_with_hint(
                Self::FIELDS.default_locale,
                format!(
                    "default locale '{}' is not in the locale list",
                    self.default_locale
                ),
                format!("add \"{}\" to i18n.locales", self.default_locale),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(extra: &str) -> ConfigDiagnostics {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.i18n.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = test_parse_config("");
        assert_eq!(config.i18n.default_locale, "en");
        assert_eq!(config.i18n.locales, vec!["en".to_string()]);
        assert!(validate("").is_empty());
    }

    #[test]
    fn test_default_locale_must_be_member() {
        let diag = validate("[i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\", \"de\"]");
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "i18n.default_locale")
        );
    }

    #[test]
    fn test_member_default_locale_accepted() {
        let diag = validate("[i18n]\ndefault_locale = \"zh-Hans\"\nlocales = [\"en\", \"zh-Hans\"]");
        assert!(diag.is_empty());
    }

    #[test]
    fn test_empty_locales_rejected() {
        let diag = validate("[i18n]\nlocales = []");
        assert!(diag.has_errors());
    }

    #[test]
    fn test_duplicate_locales_rejected() {
        let diag = validate("[i18n]\nlocales = [\"en\", \"en\"]");
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.message.contains("duplicate"))
        );
    }
}

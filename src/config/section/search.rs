//! `[search]` configuration.
//!
//! Hosted search-index integration. The section is optional: leaving it
//! out builds the site without a search box. Placeholder credentials are
//! tolerated during development so a site can be scaffolded before the
//! index exists, but a production check rejects them.
//!
//! # Example
//!
//! ```toml
//! [search]
//! app_id = "YOUR_APP_ID"
//! api_key = "YOUR_API_KEY"
//! index = "mydocs"
//! contextual = true
//! ```

use crate::config::BuildMode;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Credential values treated as scaffold placeholders.
const PLACEHOLDERS: &[&str] = &["YOUR_APP_ID", "YOUR_API_KEY"];

fn is_placeholder(value: &str) -> bool {
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

/// Search-indexing service credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Application identifier issued by the search service.
    pub app_id: String,

    /// Search-only API key. Never the admin key: this value is shipped
    /// to the browser.
    pub api_key: String,

    /// Name of the index holding this site's records.
    pub index: String,

    /// Scope results to the active locale and doc version.
    pub contextual: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            api_key: String::new(),
            index: String::new(),
            contextual: true,
        }
    }
}

/// Field paths for `[search]`.
pub struct SearchFields {
    pub app_id: FieldPath,
    pub api_key: FieldPath,
    pub index: FieldPath,
}

impl SearchConfig {
    pub const FIELDS: SearchFields = SearchFields {
        app_id: FieldPath::new("search.app_id"),
        api_key: FieldPath::new("search.api_key"),
        index: FieldPath::new("search.index"),
    };

    /// Whether any credential still carries a scaffold placeholder.
    pub fn has_placeholder_credentials(&self) -> bool {
        [&self.app_id, &self.api_key].iter().any(|v| is_placeholder(v))
    }

    /// Validate search settings.
    ///
    /// Placeholder credentials are an error in production mode and a
    /// hint otherwise. An empty index name is always an error: there is
    /// no sensible placeholder for it.
    pub fn validate(&self, mode: BuildMode, diag: &mut ConfigDiagnostics) {
        if self.index.is_empty() {
            diag.error(Self::FIELDS.index, "search index name must not be empty");
        }

        let credentials = [
            (Self::FIELDS.app_id, &self.app_id),
            (Self::FIELDS.api_key, &self.api_key),
        ];
        for (field, value) in credentials {
            if !is_placeholder(value) {
                continue;
            }
            match mode {
                BuildMode::Production => {
                    diag.error_with_hint(
                        field,
                        "placeholder search credential in a production check",
                        "set real credentials or remove the [search] section",
                    );
                }
                BuildMode::Development => {
                    diag.hint(
                        field,
                        "placeholder credential; the search box will not work",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const PLACEHOLDER_SEARCH: &str =
        "[search]\napp_id = \"YOUR_APP_ID\"\napi_key = \"YOUR_API_KEY\"\nindex = \"mydocs\"";

    #[test]
    fn test_absent_section_is_none() {
        let config = test_parse_config("");
        assert!(config.search.is_none());
    }

    #[test]
    fn test_contextual_defaults_on() {
        let config = test_parse_config(PLACEHOLDER_SEARCH);
        assert!(config.search.unwrap().contextual);
    }

    #[test]
    fn test_placeholders_detected() {
        let config = test_parse_config(PLACEHOLDER_SEARCH);
        assert!(config.search.unwrap().has_placeholder_credentials());

        let real = SearchConfig {
            app_id: "A1B2C3".into(),
            api_key: "deadbeef".into(),
            index: "mydocs".into(),
            contextual: true,
        };
        assert!(!real.has_placeholder_credentials());
    }

    #[test]
    fn test_placeholders_pass_development_check() {
        let config = test_parse_config(PLACEHOLDER_SEARCH);
        let mut diag = ConfigDiagnostics::new();
        config
            .search
            .unwrap()
            .validate(BuildMode::Development, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_placeholders_fail_production_check() {
        let config = test_parse_config(PLACEHOLDER_SEARCH);
        let mut diag = ConfigDiagnostics::new();
        config
            .search
            .unwrap()
            .validate(BuildMode::Production, &mut diag);
        assert_eq!(diag.len(), 2);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["search.app_id", "search.api_key"]);
    }

    #[test]
    fn test_empty_index_always_rejected() {
        let config = test_parse_config("[search]\napp_id = \"A\"\napi_key = \"B\"");
        let mut diag = ConfigDiagnostics::new();
        config
            .search
            .unwrap()
            .validate(BuildMode::Development, &mut diag);
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "search.index")
        );
    }
}

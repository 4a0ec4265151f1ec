//! `[docs]` configuration.
//!
//! Where the documentation sources live and how they are served.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! content = "docs"
//! sidebar = "sidebars.toml"
//! route_base = "/"
//! edit_url = "https://github.com/example/project/tree/main/website/"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Documentation source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory containing the doc pages (relative to the site root).
    pub content: PathBuf,

    /// Sidebar definition file (relative to the site root).
    pub sidebar: PathBuf,

    /// URL prefix doc pages are served under. "/" serves docs at the
    /// site root.
    pub route_base: String,

    /// Template URL for "edit this page" links. Omit to disable them.
    pub edit_url: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("docs"),
            sidebar: PathBuf::from("sidebars.toml"),
            route_base: "/".into(),
            edit_url: None,
        }
    }
}

/// Field paths for `[docs]`.
pub struct DocsFields {
    pub content: FieldPath,
    pub sidebar: FieldPath,
    pub route_base: FieldPath,
    pub edit_url: FieldPath,
}

impl DocsConfig {
    pub const FIELDS: DocsFields = DocsFields {
        content: FieldPath::new("docs.content"),
        sidebar: FieldPath::new("docs.sidebar"),
        route_base: FieldPath::new("docs.route_base"),
        edit_url: FieldPath::new("docs.edit_url"),
    };

    /// Validate doc source settings.
    ///
    /// # Checks
    /// - `content` must be an existing directory under `root`
    /// - `sidebar` must be an existing file under `root`
    /// - `route_base` must start with `/`
    /// - `edit_url`, when set, must be a valid absolute http(s) URL
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        let content = root.join(&self.content);
        if !content.is_dir() {
            diag.error_with_hint(
                Self::FIELDS.content,
                format!("content directory '{}' not found", self.content.display()),
                "create the directory or point docs.content at the doc sources",
            );
        }

        if !root.join(&self.sidebar).is_file() {
            diag.error(
                Self::FIELDS.sidebar,
                format!("sidebar file '{}' not found", self.sidebar.display()),
            );
        }

        if !self.route_base.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.route_base,
                format!("route_base '{}' must start with '/'", self.route_base),
                format!("use \"/{}\"", self.route_base),
            );
        }

        if let Some(edit_url) = &self.edit_url {
            match url::Url::parse(edit_url) {
                Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
                    diag.error(
                        Self::FIELDS.edit_url,
                        format!("scheme '{}' not supported, must be http or https", parsed.scheme()),
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    diag.error(Self::FIELDS.edit_url, format!("invalid URL: {e}"));
                }
            }
        }
    }
}

//! `[site]` configuration.
//!
//! Core site metadata: title, tagline, production URL, base path and the
//! hosting-target identifiers. These values feed page metadata and link
//! generation in the downstream build.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Site metadata and deployment identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, rendered in the navbar and page metadata.
    pub title: String,

    /// Short tagline, rendered on the landing page. Omit to render
    /// nothing; an explicitly empty tagline is rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    /// Production URL (e.g., "https://example.github.io").
    pub url: String,

    /// Pathname the site is served under, with leading and trailing
    /// slashes (e.g., "/my-project/"). For project pages this is
    /// usually "/<project>/".
    pub base_url: String,

    /// Favicon path, relative to the site root.
    pub favicon: Option<PathBuf>,

    /// Hosting organization or user name.
    pub organization: String,

    /// Hosting repository name.
    pub project: String,

    /// What to do when a navbar/footer route has no matching doc.
    pub on_broken_links: BrokenLinkAction,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: None,
            url: String::new(),
            base_url: "/".into(),
            favicon: None,
            organization: String::new(),
            project: String::new(),
            on_broken_links: BrokenLinkAction::default(),
        }
    }
}

/// How broken internal links are treated during `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkAction {
    /// Fail the check (build aborts).
    #[default]
    Throw,
    /// Report and continue.
    Warn,
    /// Skip the check entirely.
    Ignore,
}

/// Field paths for `[site]`.
pub struct SiteFields {
    pub title: FieldPath,
    pub tagline: FieldPath,
    pub url: FieldPath,
    pub base_url: FieldPath,
    pub favicon: FieldPath,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteFields = SiteFields {
        title: FieldPath::new("site.title"),
        tagline: FieldPath::new("site.tagline"),
        url: FieldPath::new("site.url"),
        base_url: FieldPath::new("site.base_url"),
        favicon: FieldPath::new("site.favicon"),
    };

    /// The URL path prefix the generated site is served under.
    ///
    /// This is `base_url` verbatim: title = "My Docs" with
    /// base_url = "/my-docs/" serves the site root at "/my-docs/".
    pub fn site_root_path(&self) -> &str {
        &self.base_url
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must be non-empty
    /// - `tagline`, when set, must be non-empty
    /// - `url` must be a valid absolute http(s) URL with a host
    /// - `base_url` must start and end with `/`
    /// - `favicon`, when set, must exist under `root`
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }

        if let Some(tagline) = &self.tagline
            && tagline.is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.tagline,
                "tagline must not be empty when set",
                "remove the field to render no tagline",
            );
        }

        self.validate_url(diag);
        self.validate_base_url(diag);

        if let Some(favicon) = &self.favicon
            && !root.join(favicon).exists()
        {
            diag.error(
                Self::FIELDS.favicon,
                format!("favicon '{}' not found", favicon.display()),
            );
        }
    }

    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        if self.url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site URL is required",
                "set the production URL, e.g.: \"https://example.github.io\"",
            );
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }

    fn validate_base_url(&self, diag: &mut ConfigDiagnostics) {
        let base = &self.base_url;
        if !base.starts_with('/') || !base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base_url,
                format!("base_url '{base}' must start and end with '/'"),
                format!("use \"/{}/\"", base.trim_matches('/')),
            );
        }

        // GitHub Pages project sites serve under /<project>/; a url whose
        // path disagrees with base_url usually means one of them is stale.
        if let Some(url_path) = crate::config::util::extract_url_path(&self.url)
            && !url_path.is_empty()
            && base.trim_matches('/') != url_path
        {
            diag.hint(
                Self::FIELDS.base_url,
                format!("site.url path '/{url_path}' does not match base_url '{base}'"),
            );
        }
    }
}

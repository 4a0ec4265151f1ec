//! Site configuration management for `sitedoc.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── i18n       # [i18n]
//! │   ├── docs       # [docs]
//! │   ├── navbar     # [navbar]
//! │   ├── footer     # [footer]
//! │   ├── theme      # [theme]
//! │   ├── search     # [search]
//! │   └── link       # shared link descriptors
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The record is loaded once, validated as a whole batch, and handed to
//! the downstream build. Loading performs no work beyond reading the
//! file and checking paths exist; all failures surface as diagnostics
//! naming the offending field.

pub mod section;
pub mod types;
pub(crate) mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    BrokenLinkAction, DocsConfig, FooterConfig, FooterSection, FooterStyle, I18nConfig, LinkItem,
    LinkPosition, LinkTarget, LogoConfig, NavbarConfig, PrismConfig, SearchConfig,
    SiteSectionConfig, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::Cli;
use crate::log;
use crate::routes::RouteTable;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// build mode
// ============================================================================

/// Which ruleset a check runs under.
///
/// Production tightens checks that are forgiving during scaffolding,
/// currently only placeholder search credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitedoc.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (title, urls, deployment identity)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Locale settings
    #[serde(default)]
    pub i18n: I18nConfig,

    /// Doc sources and routing
    #[serde(default)]
    pub docs: DocsConfig,

    /// Top navigation bar
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Footer link columns
    #[serde(default)]
    pub footer: FooterConfig,

    /// Theming and syntax highlighting
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Search integration; absent means no search box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConfig>,
}

impl SiteConfig {
    /// Load configuration for the CLI, searching upward from cwd.
    ///
    /// The site root is the config file's parent directory.
    pub fn load_for_cli(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            log!(
                "error";
                "Config file '{}' not found. Run 'sitedoc init' to create a new site.",
                cli.config.display()
            );
            std::process::exit(1);
        };
        Self::load(&config_path)
    }

    /// Load configuration from a file path with unknown field detection.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (sitedoc.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Get the site root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the site root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole record, collecting every diagnostic.
    ///
    /// Prints collected hints/warnings and fails with the full error
    /// batch. Link targets are not checked here; see [`Self::check_links`].
    pub fn validate(&self, mode: BuildMode) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.validate_into(mode, &mut diag);

        diag.print_hints_and_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section's checks into an existing diagnostics batch.
    pub fn validate_into(&self, mode: BuildMode, diag: &mut ConfigDiagnostics) {
        self.site.validate(&self.root, diag);
        self.i18n.validate(diag);
        self.docs.validate(&self.root, diag);
        self.navbar.validate(&self.root, diag);
        self.footer.validate(diag);
        self.theme.validate(&self.root, diag);
        if let Some(search) = &self.search {
            search.validate(mode, diag);
        }
    }

    /// Check every internal navbar/footer target against the route table.
    ///
    /// Misses are reported at the level `site.on_broken_links` selects:
    /// `throw` adds errors, `warn` adds warnings, `ignore` skips the
    /// check entirely.
    pub fn check_links(&self, routes: &RouteTable, diag: &mut ConfigDiagnostics) {
        if self.site.on_broken_links == BrokenLinkAction::Ignore {
            return;
        }

        let navbar = self
            .navbar
            .items
            .iter()
            .map(|link| (NavbarConfig::FIELDS.items, link));
        let footer = self.footer.sections.iter().flat_map(|section| {
            section
                .links
                .iter()
                .map(|link| (FooterConfig::FIELDS.sections, link))
        });

        for (field, link) in navbar.chain(footer) {
            let Some(LinkTarget::Internal(to)) = link.target() else {
                continue;
            };
            if routes.contains(to) {
                continue;
            }

            let message = format!("'{}' points at '{to}', which matches no doc page", link.label);
            match self.site.on_broken_links {
                BrokenLinkAction::Throw => diag.error_with_hint(
                    field,
                    message,
                    "add the missing doc page or set site.on_broken_links = \"warn\"",
                ),
                BrokenLinkAction::Warn => diag.warn(field, message),
                BrokenLinkAction::Ignore => unreachable!(),
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a snippet appended to a bare `[site]` header.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
[site]
title = "MirrorDNA Ecosystem"
tagline = "Trustworthy AI through Observability and Reflection"
url = "https://example.github.io"
base_url = "/MirrorDNA-Docs/"
organization = "example"
project = "MirrorDNA-Docs"
on_broken_links = "throw"

[i18n]
default_locale = "en"
locales = ["en"]

[docs]
content = "docs"
sidebar = "sidebars.toml"
route_base = "/"

[navbar]
title = "MirrorDNA"

[[navbar.items]]
label = "Documentation"
to = "/"

[[navbar.items]]
label = "GitHub"
href = "https://github.com/example"
position = "right"

[footer]
style = "dark"
copyright = "Copyright © Example"

[[footer.sections]]
title = "Ecosystem"
links = [
    { label = "Standard", to = "/mirrordna" },
    { label = "LingOS", to = "/lingos" },
]

[theme.prism]
light = "github"
dark = "dracula"
languages = ["python", "bash"]

[search]
app_id = "YOUR_APP_ID"
api_key = "YOUR_API_KEY"
index = "mirrordna"
contextual = true
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config_parses() {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.site.title, "MirrorDNA Ecosystem");
        assert_eq!(config.site.site_root_path(), "/MirrorDNA-Docs/");
        assert_eq!(config.navbar.items.len(), 2);
        assert_eq!(config.footer.sections[0].links[1].label, "LingOS");
        assert_eq!(config.search.as_ref().unwrap().index, "mirrordna");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(FULL_CONFIG).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_round_trip_is_stable() {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let reloaded = SiteConfig::from_str(&serialized).unwrap();
        let reserialized = toml::to_string(&reloaded).unwrap();
        assert_eq!(serialized, reserialized);
    }

    #[test]
    fn test_check_links_throw_reports_missing_route() {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();

        // Routes exist for everything except /lingos
        let mut routes = RouteTable::default();
        routes.insert("/");
        routes.insert("/mirrordna");

        let mut diag = ConfigDiagnostics::new();
        config.check_links(&routes, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("/lingos"));
    }

    #[test]
    fn test_check_links_warn_does_not_error() {
        let mut config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        config.site.on_broken_links = BrokenLinkAction::Warn;

        let mut diag = ConfigDiagnostics::new();
        config.check_links(&RouteTable::default(), &mut diag);
        assert!(diag.is_empty());
        assert!(!diag.warnings().is_empty());
    }

    #[test]
    fn test_check_links_ignore_skips() {
        let mut config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        config.site.on_broken_links = BrokenLinkAction::Ignore;

        let mut diag = ConfigDiagnostics::new();
        config.check_links(&RouteTable::default(), &mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_load_sets_root_to_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitedoc.toml");
        std::fs::write(&path, FULL_CONFIG).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(
            config.root,
            std::path::absolute(dir.path()).unwrap_or_else(|_| dir.path().to_path_buf())
        );
    }
}

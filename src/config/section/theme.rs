//! `[theme]` and `[theme.prism]` configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! custom_css = "src/css/custom.css"
//! respect_color_scheme = true
//!
//! [theme.prism]
//! light = "github"
//! dark = "dracula"
//! languages = ["python", "bash", "yaml"]
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prism color themes bundled with the renderer.
const PRISM_THEMES: &[&str] = &[
    "dracula",
    "duotoneDark",
    "duotoneLight",
    "github",
    "gruvboxMaterialDark",
    "gruvboxMaterialLight",
    "jettwaveDark",
    "jettwaveLight",
    "nightOwl",
    "nightOwlLight",
    "oceanicNext",
    "okaidia",
    "oneDark",
    "oneLight",
    "palenight",
    "shadesOfPurple",
    "synthwave84",
    "ultramin",
    "vsDark",
    "vsLight",
];

/// Highlight grammars that can be loaded in addition to the defaults.
const PRISM_LANGUAGES: &[&str] = &[
    "bash", "c", "cpp", "csharp", "css", "diff", "docker", "elixir", "go", "graphql", "haskell",
    "html", "java", "javascript", "json", "jsx", "kotlin", "lua", "makefile", "markdown", "nginx",
    "perl", "php", "python", "r", "ruby", "rust", "scala", "sql", "swift", "toml", "tsx",
    "typescript", "yaml", "zig",
];

/// Theming settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Extra stylesheet applied on top of the base theme.
    pub custom_css: Option<PathBuf>,

    /// Social card image used in link previews.
    pub social_card: Option<PathBuf>,

    /// Follow the OS light/dark preference instead of defaulting to light.
    pub respect_color_scheme: bool,

    /// Syntax highlighting settings.
    pub prism: PrismConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            custom_css: None,
            social_card: None,
            respect_color_scheme: true,
            prism: PrismConfig::default(),
        }
    }
}

/// Syntax highlighting theme pair and extra grammars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    /// Theme for light color mode.
    pub light: String,

    /// Theme for dark color mode.
    pub dark: String,

    /// Grammars to load in addition to the built-in defaults.
    pub languages: Vec<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            light: "github".into(),
            dark: "dracula".into(),
            languages: Vec::new(),
        }
    }
}

/// Field paths for `[theme]`.
pub struct ThemeFields {
    pub custom_css: FieldPath,
    pub social_card: FieldPath,
    pub prism_light: FieldPath,
    pub prism_dark: FieldPath,
    pub prism_languages: FieldPath,
}

impl ThemeConfig {
    pub const FIELDS: ThemeFields = ThemeFields {
        custom_css: FieldPath::new("theme.custom_css"),
        social_card: FieldPath::new("theme.social_card"),
        prism_light: FieldPath::new("theme.prism.light"),
        prism_dark: FieldPath::new("theme.prism.dark"),
        prism_languages: FieldPath::new("theme.prism.languages"),
    };

    /// Validate theme settings.
    ///
    /// # Checks
    /// - `custom_css` and `social_card`, when set, must exist under `root`
    /// - both prism themes must be bundled theme names
    /// - every extra language must be a supported grammar
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if let Some(css) = &self.custom_css
            && !root.join(css).is_file()
        {
            diag.error(
                Self::FIELDS.custom_css,
                format!("stylesheet '{}' not found", css.display()),
            );
        }

        if let Some(card) = &self.social_card
            && !root.join(card).exists()
        {
            diag.error(
                Self::FIELDS.social_card,
                format!("social card image '{}' not found", card.display()),
            );
        }

        self.prism.validate(diag);
    }
}

impl PrismConfig {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, theme) in [
            (ThemeConfig::FIELDS.prism_light, &self.light),
            (ThemeConfig::FIELDS.prism_dark, &self.dark),
        ] {
            if !PRISM_THEMES.contains(&theme.as_str()) {
                diag.error_with_hint(
                    field,
                    format!("unknown prism theme '{theme}'"),
                    format!("bundled themes: {}", PRISM_THEMES.join(", ")),
                );
            }
        }

        for language in &self.languages {
            if !PRISM_LANGUAGES.contains(&language.as_str()) {
                diag.error_with_hint(
                    ThemeConfig::FIELDS.prism_languages,
                    format!("unsupported language '{language}'"),
                    format!("supported languages: {}", PRISM_LANGUAGES.join(", ")),
                );
            }
        }
    }
}

//! `[navbar]` configuration.
//!
//! # Example
//!
//! ```toml
//! [navbar]
//! title = "My Project"
//! logo = { src = "img/logo.svg", alt = "My Project Logo" }
//!
//! [[navbar.items]]
//! label = "Documentation"
//! to = "/"
//!
//! [[navbar.items]]
//! label = "GitHub"
//! href = "https://github.com/example/project"
//! position = "right"
//! ```

use crate::config::section::LinkItem;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top navigation bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Brand text shown next to the logo. Falls back to `site.title`
    /// downstream when empty.
    pub title: String,

    /// Brand logo.
    pub logo: Option<LogoConfig>,

    /// Navigation entries, rendered in declaration order.
    pub items: Vec<LinkItem>,
}

/// Navbar logo image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Image path, relative to the site root.
    pub src: PathBuf,

    /// Alt text.
    pub alt: String,
}

/// Field paths for `[navbar]`.
pub struct NavbarFields {
    pub logo: FieldPath,
    pub items: FieldPath,
}

impl NavbarConfig {
    pub const FIELDS: NavbarFields = NavbarFields {
        logo: FieldPath::new("navbar.logo"),
        items: FieldPath::new("navbar.items"),
    };

    /// Validate the navbar: logo image must exist, every item must be a
    /// well-formed link descriptor.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && !root.join(&logo.src).exists()
        {
            diag.error(
                Self::FIELDS.logo,
                format!("logo image '{}' not found", logo.src.display()),
            );
        }

        for (i, item) in self.items.iter().enumerate() {
            item.validate(Self::FIELDS.items, &item_context(i, item), diag);
        }
    }
}

/// Human-readable position of a link entry, preferring the label.
pub(crate) fn item_context(index: usize, item: &LinkItem) -> String {
    if item.label.is_empty() {
        format!("item {}", index + 1)
    } else {
        format!("'{}'", item.label)
    }
}

//! `[footer]` configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! style = "dark"
//! copyright = "Copyright © Example Project"
//!
//! [[footer.sections]]
//! title = "Community"
//! links = [
//!     { label = "GitHub", href = "https://github.com/example" },
//!     { label = "Discord", href = "https://discord.gg/example" },
//! ]
//! ```

use crate::config::section::LinkItem;
use crate::config::section::navbar::item_context;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Page footer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer color style.
    pub style: FooterStyle,

    /// Copyright line, rendered below the link sections.
    pub copyright: String,

    /// Link columns, rendered in declaration order.
    pub sections: Vec<FooterSection>,
}

/// One footer column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSection {
    /// Column heading.
    pub title: String,

    /// Links in this column, in declaration order.
    pub links: Vec<LinkItem>,
}

/// Footer color style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

/// Field paths for `[footer]`.
pub struct FooterFields {
    pub sections: FieldPath,
}

impl FooterConfig {
    pub const FIELDS: FooterFields = FooterFields {
        sections: FieldPath::new("footer.sections"),
    };

    /// Validate footer sections: headings must be non-empty, every link
    /// must be a well-formed link descriptor.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (s, section) in self.sections.iter().enumerate() {
            if section.title.is_empty() {
                diag.error(
                    Self::FIELDS.sections,
                    format!("section {}: title must not be empty", s + 1),
                );
            }
            for (i, link) in section.links.iter().enumerate() {
                let context = if section.title.is_empty() {
                    format!("section {}, {}", s + 1, item_context(i, link))
                } else {
                    format!("section '{}', {}", section.title, item_context(i, link))
                };
                link.validate(Self::FIELDS.sections, &context, diag);
            }
        }
    }
}

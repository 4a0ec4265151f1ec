//! Link descriptors shared by `[navbar]` and `[footer]`.
//!
//! A link points at either an internal doc route (`to`) or an external
//! URL (`href`), never both. The split stays as two optional TOML keys
//! rather than an untagged enum so a bad entry produces a field-level
//! diagnostic instead of an opaque serde error.
//!
//! # Example
//!
//! ```toml
//! [[navbar.items]]
//! label = "Documentation"
//! to = "/"
//!
//! [[navbar.items]]
//! label = "GitHub"
//! href = "https://github.com/example/project"
//! position = "right"
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A navbar or footer link entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkItem {
    /// Display label.
    pub label: String,

    /// Internal doc route (e.g., "/getting-started").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// External URL (e.g., "https://github.com/example/project").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Horizontal placement in the navbar. Ignored for footer links.
    pub position: LinkPosition,
}

/// Where the resolved link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Internal doc route, checked against the route table.
    Internal(&'a str),
    /// External URL, only checked for syntactic validity.
    External(&'a str),
}

/// Navbar placement for a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPosition {
    #[default]
    Left,
    Right,
}

impl LinkItem {
    /// Resolve the link target. Returns `None` when the entry sets both
    /// or neither of `to`/`href`; `validate` reports those as errors.
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        match (self.to.as_deref(), self.href.as_deref()) {
            (Some(to), None) => Some(LinkTarget::Internal(to)),
            (None, Some(href)) => Some(LinkTarget::External(href)),
            _ => None,
        }
    }

    /// Validate this entry.
    ///
    /// # Checks
    /// - `label` must be non-empty
    /// - exactly one of `to` / `href` is set
    /// - `to` must start with `/`
    /// - `href` must be a valid absolute http(s) URL
    ///
    /// `field` names the owning list (e.g., `navbar.items`); `context`
    /// identifies the entry inside it for the error message.
    pub fn validate(&self, field: FieldPath, context: &str, diag: &mut ConfigDiagnostics) {
        if self.label.is_empty() {
            diag.error(field, format!("{context}: link label must not be empty"));
        }

        match (self.to.as_deref(), self.href.as_deref()) {
            (Some(_), Some(_)) => {
                diag.error_with_hint(
                    field,
                    format!("{context}: link sets both 'to' and 'href'"),
                    "keep 'to' for internal routes or 'href' for external URLs, not both",
                );
            }
            (None, None) => {
                diag.error_with_hint(
                    field,
                    format!("{context}: link sets neither 'to' nor 'href'"),
                    "set 'to' for an internal route or 'href' for an external URL",
                );
            }
            (Some(to), None) => {
                if !to.starts_with('/') {
                    diag.error_with_hint(
                        field,
                        format!("{context}: internal route '{to}' must start with '/'"),
                        format!("use \"/{to}\""),
                    );
                }
            }
            (None, Some(href)) => match url::Url::parse(href) {
                Ok(parsed) if !matches!(parsed.scheme(), "http" | "https") => {
                    diag.error(
                        field,
                        format!(
                            "{context}: scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    diag.error(field, format!("{context}: invalid URL '{href}': {e}"));
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal(to: &str) -> LinkItem {
        LinkItem {
            label: "Docs".into(),
            to: Some(to.into()),
            ..LinkItem::default()
        }
    }

    #[test]
    fn test_target_internal() {
        let link = internal("/getting-started");
        assert_eq!(link.target(), Some(LinkTarget::Internal("/getting-started")));
    }

    #[test]
    fn test_target_external() {
        let link = LinkItem {
            label: "GitHub".into(),
            href: Some("https://github.com/example".into()),
            ..LinkItem::default()
        };
        assert_eq!(
            link.target(),
            Some(LinkTarget::External("https://github.com/example"))
        );
    }

    #[test]
    fn test_target_ambiguous_is_none() {
        let both = LinkItem {
            label: "x".into(),
            to: Some("/a".into()),
            href: Some("https://example.com".into()),
            ..LinkItem::default()
        };
        assert_eq!(both.target(), None);

        let neither = LinkItem {
            label: "x".into(),
            ..LinkItem::default()
        };
        assert_eq!(neither.target(), None);
    }

    #[test]
    fn test_validate_exactly_one_target() {
        let field = FieldPath::new("navbar.items");

        let mut diag = ConfigDiagnostics::new();
        internal("/docs").validate(field, "item 1", &mut diag);
        assert!(diag.is_empty());

        let mut diag = ConfigDiagnostics::new();
        let both = LinkItem {
            label: "x".into(),
            to: Some("/a".into()),
            href: Some("https://example.com".into()),
            ..LinkItem::default()
        };
        both.validate(field, "item 1", &mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        let neither = LinkItem {
            label: "x".into(),
            ..LinkItem::default()
        };
        neither.validate(field, "item 1", &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_route_needs_leading_slash() {
        let mut diag = ConfigDiagnostics::new();
        internal("getting-started").validate(FieldPath::new("navbar.items"), "item 1", &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_href_scheme() {
        let mut diag = ConfigDiagnostics::new();
        let link = LinkItem {
            label: "ftp".into(),
            href: Some("ftp://example.com/file".into()),
            ..LinkItem::default()
        };
        link.validate(FieldPath::new("footer.sections"), "item 1", &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_validate_empty_label() {
        let mut diag = ConfigDiagnostics::new();
        let link = LinkItem {
            to: Some("/docs".into()),
            ..LinkItem::default()
        };
        link.validate(FieldPath::new("navbar.items"), "item 1", &mut diag);
        assert_eq!(diag.len(), 1);
    }
}

//! Route registry derived from the doc sources.
//!
//! The downstream generator turns every markdown file under
//! `docs.content` into a page; this module derives the same routes so
//! navbar/footer internal links can be checked without building.
//!
//! ```text
//! docs/index.md          -> /
//! docs/mirrordna.md      -> /mirrordna
//! docs/guides/intro.mdx  -> /guides/intro
//! docs/guides/README.md  -> /guides
//! ```

use crate::config::DocsConfig;
use anyhow::{Context, Result};
use jwalk::WalkDir;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Doc source extensions that become pages.
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// The set of routes the generated site will serve.
///
/// Lookup is trailing-slash insensitive: `/guides` and `/guides/` name
/// the same page.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: FxHashSet<String>,
}

impl RouteTable {
    /// Scan the doc content directory and derive the route for every
    /// page file, prefixed with `route_base`.
    pub fn scan(docs: &DocsConfig, root: &Path) -> Result<Self> {
        let content = root.join(&docs.content);
        let mut table = Self::default();

        for entry in WalkDir::new(&content).sort(true) {
            let entry = entry
                .with_context(|| format!("failed to scan '{}'", content.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Ok(relative) = path.strip_prefix(&content) else {
                continue;
            };
            if let Some(route) = route_for_file(relative, &docs.route_base) {
                table.routes.insert(route);
            }
        }

        Ok(table)
    }

    /// Add a route directly. Used by tests and by callers that know
    /// about generated pages outside the content directory.
    pub fn insert(&mut self, route: &str) {
        self.routes.insert(normalize(route));
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains(&normalize(route))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Canonical form for lookup: no trailing slash except the bare root.
fn normalize(route: &str) -> String {
    let trimmed = route.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derive the served route for a doc source file, or `None` for files
/// that do not become pages (assets, images, partials).
///
/// `index` and `README` files map to their directory's route.
fn route_for_file(relative: &Path, route_base: &str) -> Option<String> {
    let extension = relative.extension()?.to_str()?;
    if !PAGE_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
        return None;
    }

    let stem = relative.file_stem()?.to_str()?;
    let mut segments: Vec<&str> = relative
        .parent()
        .into_iter()
        .flat_map(|p| p.components())
        .filter_map(|c| c.as_os_str().to_str())
        .collect();
    if stem != "index" && stem != "README" {
        segments.push(stem);
    }

    let base = route_base.trim_end_matches('/');
    let route = if segments.is_empty() {
        normalize(base)
    } else {
        format!("{base}/{}", segments.join("/"))
    };
    Some(route)
}

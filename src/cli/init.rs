//! Init command implementation.
//!
//! Scaffolds a new site: a starter `sitedoc.toml` plus the doc skeleton
//! it references, so a fresh site passes `sitedoc check` immediately.

use crate::log;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TEMPLATE: &str = r#"[site]
title = "My Docs"
tagline = "Documentation for my project"
url = "https://example.github.io"
base_url = "/"
organization = "example"
project = "my-docs"
on_broken_links = "throw"

[i18n]
default_locale = "en"
locales = ["en"]

[docs]
content = "docs"
sidebar = "sidebars.toml"
route_base = "/"

[navbar]
title = "My Docs"

[[navbar.items]]
label = "Documentation"
to = "/"

[[footer.sections]]
title = "Community"
links = [{ label = "GitHub", href = "https://github.com/example" }]

[theme.prism]
light = "github"
dark = "dracula"
"#;

const INDEX_TEMPLATE: &str = "# My Docs\n\nWelcome. Edit `docs/index.md` to get started.\n";

const SIDEBAR_TEMPLATE: &str = "# Sidebar definition, consumed by the site generator.\ndocs = [\"index\"]\n";

/// Execute init command
pub fn new_site(name: Option<&Path>, config_name: &Path) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let target = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    let config_path = target.join(config_name);
    if config_path.exists() {
        bail!("'{}' already exists", config_path.display());
    }

    write_new(&config_path, CONFIG_TEMPLATE)?;
    write_new(&target.join("sidebars.toml"), SIDEBAR_TEMPLATE)?;
    write_new(&target.join("docs").join("index.md"), INDEX_TEMPLATE)?;

    log!("init"; "created site at {}", target.display());
    log!("init"; "next: edit {} and run 'sitedoc check'", config_name.display());
    Ok(())
}

/// Create a file without clobbering anything already there.
fn write_new(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write '{}'", path.display()))
}

/// Resolve the directory init will scaffold into (for logging/tests).
#[allow(dead_code)]
pub fn target_dir(cwd: &Path, name: Option<&Path>) -> PathBuf {
    match name {
        Some(name) => cwd.join(name),
        None => cwd.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildMode, SiteConfig};

    #[test]
    fn test_template_parses_without_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(CONFIG_TEMPLATE).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
    }

    #[test]
    fn test_scaffold_passes_check() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("sitedoc.toml");

        write_new(&config_path, CONFIG_TEMPLATE).unwrap();
        write_new(&dir.path().join("sidebars.toml"), SIDEBAR_TEMPLATE).unwrap();
        write_new(&dir.path().join("docs").join("index.md"), INDEX_TEMPLATE).unwrap();

        let config = SiteConfig::load(&config_path).unwrap();
        config.validate(BuildMode::Development).unwrap();
    }

    #[test]
    fn test_write_new_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitedoc.toml");
        fs::write(&path, "existing").unwrap();

        assert!(write_new(&path, CONFIG_TEMPLATE).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_target_dir() {
        let cwd = Path::new("/work");
        assert_eq!(target_dir(cwd, None), PathBuf::from("/work"));
        assert_eq!(
            target_dir(cwd, Some(Path::new("my-docs"))),
            PathBuf::from("/work/my-docs")
        );
    }
}

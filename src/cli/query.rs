//! Query command implementation.
//!
//! Prints the resolved configuration record as JSON, for scripting and
//! for downstream tools that do not speak TOML.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let value = serde_json::to_value(config)?;
    let value = match &args.fields {
        Some(fields) => filter_fields(value, fields)?,
        None => value,
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output.as_bytes())
                .with_context(|| format!("failed to write '{}'", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{output}")?;
        }
    }

    Ok(())
}

/// Keep only the requested top-level sections.
fn filter_fields(value: JsonValue, fields: &[String]) -> Result<JsonValue> {
    let JsonValue::Object(map) = value else {
        bail!("config did not serialize to a JSON object");
    };

    let mut filtered = Map::new();
    for field in fields {
        match map.get(field) {
            Some(section) => {
                filtered.insert(field.clone(), section.clone());
            }
            None => bail!("unknown config section '{field}'"),
        }
    }
    Ok(JsonValue::Object(filtered))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> SiteConfig {
        SiteConfig::from_str(
            "[site]\ntitle = \"Docs\"\nurl = \"https://example.com\"\nbase_url = \"/docs/\"",
        )
        .unwrap()
    }

    #[test]
    fn test_serializes_internal_paths_skipped() {
        let value = serde_json::to_value(sample_config()).unwrap();
        // config_path/root are serde(skip); only schema fields appear
        assert!(value.get("config_path").is_none());
        assert!(value.get("root").is_none());
        assert_eq!(value["site"]["title"], "Docs");
    }

    #[test]
    fn test_filter_fields_keeps_requested_sections() {
        let value = serde_json::to_value(sample_config()).unwrap();
        let filtered = filter_fields(value, &["site".into(), "i18n".into()]).unwrap();

        let object = filtered.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("site"));
        assert!(object.contains_key("i18n"));
    }

    #[test]
    fn test_filter_fields_rejects_unknown_section() {
        let value = serde_json::to_value(sample_config()).unwrap();
        assert!(filter_fields(value, &["navbarr".into()]).is_err());
    }

    #[test]
    fn test_query_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("config.json");
        let args = QueryArgs {
            pretty: true,
            fields: Some(vec!["site".into()]),
            output: Some(out.clone()),
        };

        run_query(&args, &sample_config()).unwrap();

        let written = fs::read_to_string(out).unwrap();
        let value: JsonValue = serde_json::from_str(&written).unwrap();
        assert_eq!(value["site"]["base_url"], "/docs/");
    }
}

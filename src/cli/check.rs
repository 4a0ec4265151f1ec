//! Check command implementation.
//!
//! Runs the full validation pass: section checks, route scan, and
//! internal link resolution, reporting every diagnostic in one batch.

use crate::cli::args::CheckArgs;
use crate::config::{BuildMode, ConfigDiagnostics, ConfigError, DocsConfig, SiteConfig};
use crate::log;
use crate::routes::RouteTable;
use anyhow::Result;

/// Execute check command
pub fn run_check(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let mode = if args.production {
        BuildMode::Production
    } else {
        BuildMode::Development
    };

    let mut diag = ConfigDiagnostics::new();
    config.validate_into(mode, &mut diag);

    let route_count = match RouteTable::scan(&config.docs, config.get_root()) {
        Ok(routes) => {
            config.check_links(&routes, &mut diag);
            routes.len()
        }
        Err(err) => {
            report_scan_failure(config, &err, &mut diag);
            0
        }
    };

    diag.print_hints_and_warnings();

    let error_count = diag.len();
    match diag.into_result() {
        Ok(()) => {
            log!(
                "check";
                "config ok: {} doc route{}",
                route_count,
                if route_count == 1 { "" } else { "s" }
            );
            Ok(())
        }
        Err(diag) => {
            log!(
                "check";
                "failed with {} error{}",
                error_count,
                if error_count == 1 { "" } else { "s" }
            );
            Err(ConfigError::Diagnostics(diag).into())
        }
    }
}

/// A failed route walk must fail the check: without routes the link
/// check is skipped, and a passing report would hide broken links.
/// The missing-directory case is the one exception, since
/// `docs.validate` already reported it.
fn report_scan_failure(config: &SiteConfig, err: &anyhow::Error, diag: &mut ConfigDiagnostics) {
    if !config.root_join(&config.docs.content).is_dir() {
        return;
    }
    diag.error(
        DocsConfig::FIELDS.content,
        format!("failed to scan doc routes: {err:#}"),
    );
}

//! Logging utilities with colored module prefixes.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "validated {} routes", count);
//! log!("error"; "config file not found");
//! ```

use owo_colors::OwoColorize;
use std::io::{Write, stderr};

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_yellow().bold().to_string(),
        "hint" => prefix.bright_cyan().bold().to_string(),
        _ => prefix.bright_green().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_prefix_contains_module() {
        // Colors may be disabled in test environments, so only assert
        // the module name survives.
        for module in ["check", "error", "warning", "hint"] {
            assert!(colorize_prefix(module).contains(module));
        }
    }
}

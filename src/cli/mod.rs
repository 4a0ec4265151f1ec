//! Command-line interface.

mod args;
pub mod check;
pub mod init;
pub mod query;

pub use args::{CheckArgs, Cli, Commands, QueryArgs};

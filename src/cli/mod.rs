//! CLI command handlers for kitbox.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method, giving
//! headless, scriptable access for automation and shell pipelines.

pub mod color;
pub mod common;
pub mod config;
pub mod convert;
pub mod hash;
pub mod readability;

// Re-export types used by main.rs and tests
pub use color::ColorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use hash::HashArgs;
pub use readability::ReadabilityArgs;

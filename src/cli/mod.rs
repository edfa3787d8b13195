//! CLI module for world-api
//!
//! Provides the command-line interface:
//! - serve: connect to the backing store and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};

//! world-api entry point
//!
//! Parses CLI arguments, dispatches to the CLI commands, prints errors to
//! stderr and exits non-zero on failure. All logic lives in the CLI module.

use world_api::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

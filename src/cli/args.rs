//! CLI argument definitions using clap
//!
//! Commands:
//! - world-api serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// world-api - HTTP access to the world geography database
#[derive(Parser, Debug)]
#[command(name = "world-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 1323)]
        port: u16,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! CLI command implementations

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{DbConfig, MySqlStore};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and dispatch to the selected command.
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging();

    match cli.command {
        Command::Serve { host, port } => serve(host, port).await,
    }
}

/// Boot sequence: env config, store connect, serve until shutdown.
pub async fn serve(host: String, port: u16) -> CliResult<()> {
    let db_config = DbConfig::from_env()?;
    let store = MySqlStore::connect(&db_config).await?;

    let config = HttpServerConfig::with_addr(host, port);
    let server = HttpServer::new(config, Arc::new(store));
    server.start().await?;

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("world_api=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

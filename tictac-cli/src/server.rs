//! Serve command - host the game API and browser client

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tictac_server::{run_server, ServerConfig, DEFAULT_PORT, DEFAULT_STATIC_DIR};

#[derive(Args)]
pub struct ServerArgs {
    /// Port number to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory of static files served for unmatched paths
    #[arg(long, default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,
}

/// Run serve command (blocking)
pub fn run(args: ServerArgs) -> Result<()> {
    let config = ServerConfig::new(args.port, args.static_dir)?;
    tracing::info!("Serving tic-tac-toe engine on port {}", config.port);

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    runtime.block_on(run_server(config))
}

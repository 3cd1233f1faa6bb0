//! Example to run the TICTAC server standalone
//!
//! Run with: cargo run -p tictac-server --example run_server

use tictac_server::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::default();

    println!("Starting TICTAC server on port {}", config.port);
    println!("Try: curl -X POST localhost:{}/api/best-move -H 'content-type: application/json' -d '{{\"board\":\"XX.OO....\"}}'", config.port);

    run_server(config).await
}

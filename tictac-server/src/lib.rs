//! TICTAC Server - HTTP API for the engine
//!
//! This crate is a thin JSON front end over `tictac-core`:
//! - Stateless board queries and best-move search
//! - One interactive human-vs-engine session
//! - Static file serving for a browser client

mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use anyhow::bail;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use routes::ApiError;
pub use state::{GameSession, ServerState};

pub const DEFAULT_PORT: u16 = 8002;
pub const DEFAULT_STATIC_DIR: &str = "tictac/web";

/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Browser client files, served for every path outside `/api`
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Checked configuration. A missing static directory only warns, since
    /// the API works without the browser client.
    pub fn new(port: u16, static_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let static_dir = static_dir.into();

        if port == 0 {
            bail!("port must be non-zero so clients can reach the game API");
        }
        if !static_dir.exists() {
            tracing::warn!(
                "Static directory does not exist: {}. API routes still work.",
                static_dir.display()
            );
        } else if !static_dir.is_dir() {
            bail!(
                "Static path exists but is not a directory: {}",
                static_dir.display()
            );
        }

        Ok(Self { port, static_dir })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board geometry
        .route("/api/board", get(routes::board::get_board))
        // Stateless engine queries
        .route("/api/analyze", post(routes::analyze::analyze_board))
        .route("/api/best-move", post(routes::analyze::best_move))
        // Interactive game
        .route("/api/game/start", post(routes::game::start_game))
        .route("/api/game/state", get(routes::game::get_game_state))
        .route("/api/game/move", post(routes::game::make_player_move))
        .route("/api/game/ai-move", post(routes::game::make_ai_move))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let state = Arc::new(ServerState::new());
    let router = create_router(&config, state);

    tracing::info!("TICTAC Server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

//! Status endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tictac_core::{Outcome, BOARD_SIZE};

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub board_size: usize,
    pub game_active: bool,
    /// Outcome of the interactive game, if one was started
    pub game_outcome: Option<Outcome>,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    let game = state.game();

    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: "alpha-beta",
        board_size: BOARD_SIZE,
        game_active: game.active,
        game_outcome: game.active.then(|| game.board.outcome()),
    })
}

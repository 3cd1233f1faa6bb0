//! Stateless engine queries
//!
//! Boards are sent in compact notation (`"XX.OO...."`, or with `/` row
//! separators). Malformed notation is rejected by the JSON extractor.

use crate::routes::ApiError;
use axum::Json;
use serde::{Deserialize, Serialize};
use tictac_core::{search, Board, Move, Outcome, Player};

#[derive(Deserialize)]
pub struct BoardRequest {
    pub board: Board,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub board: Board,
    pub current_player: Player,
    pub legal_moves: Vec<Move>,
    pub winner: Option<Player>,
    pub terminal: bool,
    pub outcome: Outcome,
    /// Only present on finished boards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utility: Option<i32>,
}

#[derive(Serialize)]
pub struct BestMoveResponse {
    pub board: Board,
    pub best_move: Option<Move>,
    pub value: i32,
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Report every state query for a board
pub async fn analyze_board(Json(req): Json<BoardRequest>) -> Json<AnalyzeResponse> {
    let board = req.board;
    let terminal = board.is_terminal();

    Json(AnalyzeResponse {
        board,
        current_player: board.current_player(),
        legal_moves: board.legal_moves(),
        winner: board.winner(),
        terminal,
        outcome: board.outcome(),
        utility: terminal.then(|| board.utility()),
    })
}

/// Search a board for the optimal move
pub async fn best_move(
    Json(req): Json<BoardRequest>,
) -> Result<Json<BestMoveResponse>, ApiError> {
    let board = req.board;
    let result = tokio::task::spawn_blocking(move || search(&board)).await?;

    tracing::debug!(board = %board, best_move = ?result.best_move, "best-move request");

    Ok(Json(BestMoveResponse {
        board,
        best_move: result.best_move,
        value: result.value,
        nodes: result.stats.nodes,
        cutoffs: result.stats.cutoffs,
    }))
}

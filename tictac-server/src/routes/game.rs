//! Interactive game API
//!
//! One human-vs-engine session. After every human move the engine replies
//! immediately unless the game is over.

use crate::routes::ApiError;
use crate::state::{GameSession, ServerState};
use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tictac_core::{Board, MinimaxAI, Move, Outcome, Player};

#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    /// Side the human plays (defaults to X)
    pub player_side: Option<Player>,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub row: usize,
    pub col: usize,
}

#[derive(Serialize)]
pub struct GameStateResponse {
    pub active: bool,
    pub board: Board,
    pub human: Player,
    pub current_player: Player,
    pub human_to_move: bool,
    pub outcome: Outcome,
    pub history: Vec<Move>,
}

impl From<&GameSession> for GameStateResponse {
    fn from(session: &GameSession) -> Self {
        Self {
            active: session.active,
            board: session.board,
            human: session.human,
            current_player: session.board.current_player(),
            human_to_move: session.active
                && !session.board.is_terminal()
                && session.is_human_turn(),
            outcome: session.board.outcome(),
            history: session.history.clone(),
        }
    }
}

/// Start a new game; the engine opens when the human plays O
///
/// An empty body starts with the human as X. Any other body must be a valid
/// `StartGameRequest`.
pub async fn start_game(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<GameStateResponse>, ApiError> {
    let human = parse_start_request(&body)?
        .player_side
        .unwrap_or(Player::X);

    let response = run_engine(move || {
        let mut game = state.game_mut();
        *game = GameSession::new(human);

        if !game.is_human_turn() {
            engine_reply(&mut game)?;
        }
        Ok(GameStateResponse::from(&*game))
    })
    .await?;

    tracing::info!(human = %human, "new game started");
    Ok(Json(response))
}

/// Get the current session
pub async fn get_game_state(State(state): State<Arc<ServerState>>) -> Json<GameStateResponse> {
    let game = state.game();
    Json(GameStateResponse::from(&*game))
}

/// Apply the human's move, then let the engine answer
pub async fn make_player_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let mv = Move::new(req.row, req.col);

    run_engine(move || {
        let mut game = state.game_mut();
        ensure_in_progress(&game)?;
        if !game.is_human_turn() {
            return Err(ApiError::bad_request("it is not the human player's turn"));
        }

        game.board = game.board.apply_move(mv)?;
        game.history.push(mv);

        if !game.board.is_terminal() {
            engine_reply(&mut game)?;
        }
        Ok(GameStateResponse::from(&*game))
    })
    .await
    .map(Json)
}

/// Let the engine play one move for whichever side is to move
pub async fn make_ai_move(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<GameStateResponse>, ApiError> {
    run_engine(move || {
        let mut game = state.game_mut();
        ensure_in_progress(&game)?;
        engine_reply(&mut game)?;
        Ok(GameStateResponse::from(&*game))
    })
    .await
    .map(Json)
}

fn parse_start_request(body: &[u8]) -> Result<StartGameRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(StartGameRequest { player_side: None });
    }
    serde_json::from_slice(body)
        .map_err(|err| ApiError::bad_request(format!("invalid start request: {err}")))
}

/// Session updates that may search run on the blocking pool
async fn run_engine<T, F>(job: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job).await?
}

fn ensure_in_progress(game: &GameSession) -> Result<(), ApiError> {
    if !game.active {
        return Err(ApiError::bad_request("no game in progress"));
    }
    if game.board.is_terminal() {
        return Err(ApiError::bad_request("game is already over"));
    }
    Ok(())
}

fn engine_reply(game: &mut GameSession) -> Result<(), ApiError> {
    let Some(mv) = MinimaxAI::new().best_move(&game.board) else {
        return Ok(());
    };

    game.board = game.board.apply_move(mv)?;
    game.history.push(mv);
    tracing::debug!(%mv, board = %game.board, "engine move");
    Ok(())
}

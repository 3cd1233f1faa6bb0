//! Server state management
//!
//! The engine itself is stateless; the only thing the server remembers is
//! the interactive human-vs-engine game.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tictac_core::{Board, Move, Player};

/// Interactive game state
#[derive(Clone, Debug)]
pub struct GameSession {
    pub active: bool,
    /// Side the human plays; the engine plays the other
    pub human: Player,
    pub board: Board,
    pub history: Vec<Move>,
}

impl GameSession {
    pub fn new(human: Player) -> Self {
        Self {
            active: true,
            human,
            board: Board::initial(),
            history: Vec::new(),
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.board.current_player() == self.human
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            active: false,
            human: Player::X,
            board: Board::initial(),
            history: Vec::new(),
        }
    }
}

/// Server-wide shared state
pub struct ServerState {
    current_game: RwLock<GameSession>,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            current_game: RwLock::new(GameSession::default()),
        }
    }

    /// Sessions hold plain values, so a poisoned lock is still usable
    pub fn game(&self) -> RwLockReadGuard<'_, GameSession> {
        self.current_game
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn game_mut(&self) -> RwLockWriteGuard<'_, GameSession> {
        self.current_game
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

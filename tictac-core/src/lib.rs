//! TICTAC Core - Game engine and AI
//!
//! This crate provides the core game logic for 3x3 tic-tac-toe:
//! - Grid geometry (row/column coordinates, winning lines)
//! - Board state, turn order and move application
//! - Terminal scoring
//! - Exhaustive alpha-beta minimax AI
//! - State-space enumeration and search verification

pub mod board;
pub mod game;
pub mod eval;
pub mod ai;
pub mod analysis;

// Re-exports for convenient access
pub use board::{Move, BOARD_SIZE, CELL_COUNT, LINES, LINE_NAMES};
pub use game::{Board, BoardParseError, Cell, InvalidMoveError, Outcome, Player};
pub use eval::{utility, DRAW_VALUE, LOSS_VALUE, WIN_VALUE};
pub use ai::{best_move, minimax, search, MinimaxAI, SearchResult, SearchStats};
pub use analysis::{census, reachable_boards, verify_pruning, Census, PruningReport};

//! Exhaustive minimax search with alpha-beta pruning
//!
//! The game tree is small enough to solve exactly, so there is no depth
//! limit, no heuristic evaluation and no transposition table. Every search
//! runs to terminal boards and scores them with [`crate::eval::utility`].
//!
//! Moves are always tried in row-major order and a later move only replaces
//! the current best when it is strictly better, so the first optimal move
//! in row-major order is the one returned.

use crate::board::Move;
use crate::game::{Board, Player};
use serde::{Deserialize, Serialize};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Bounds standing in for -inf / +inf. Values are never negated, so the
/// extremes cannot overflow.
const NEG_INFINITY: i32 = i32::MIN;
const INFINITY: i32 = i32::MAX;

// ============================================================================
// RESULTS
// ============================================================================

/// Work done by a single search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, root included
    pub nodes: u64,
    /// Move loops abandoned early by an alpha or beta cutoff
    pub cutoffs: u64,
}

/// Root move and its game-theoretic value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// `None` when the root is terminal
    pub best_move: Option<Move>,
    /// Final score under optimal play (+1 X wins, -1 O wins, 0 draw)
    pub value: i32,
    pub stats: SearchStats,
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Optimal move for the side to move, `None` if the game is already over
pub fn best_move(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }
    search(board).best_move
}

/// Alpha-beta search from `board` with a full (-inf, +inf) window
pub fn search(board: &Board) -> SearchResult {
    let mut stats = SearchStats::default();
    let (value, best_move) = match board.current_player() {
        Player::X => max_value(board, NEG_INFINITY, INFINITY, &mut stats),
        Player::O => min_value(board, NEG_INFINITY, INFINITY, &mut stats),
    };

    tracing::debug!(
        board = %board,
        best_move = ?best_move,
        value,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "alpha-beta search complete"
    );

    SearchResult {
        best_move,
        value,
        stats,
    }
}

/// Unpruned minimax with the same move order and tie-break as [`search`].
/// Visits the whole subtree; used to check that pruning never changes the
/// answer.
pub fn minimax(board: &Board) -> SearchResult {
    let mut stats = SearchStats::default();
    let (value, best_move) = minimax_value(board, &mut stats);

    SearchResult {
        best_move,
        value,
        stats,
    }
}

// ============================================================================
// MINIMAX AI
// ============================================================================

/// Perfect tic-tac-toe player
#[derive(Clone, Debug)]
pub struct MinimaxAI {
    pub pruning: bool,
}

impl MinimaxAI {
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Player that searches every node (same moves, slower)
    pub fn without_pruning() -> Self {
        Self { pruning: false }
    }

    pub fn search(&self, board: &Board) -> SearchResult {
        if self.pruning {
            search(board)
        } else {
            minimax(board)
        }
    }

    /// Get best move for current position
    pub fn best_move(&self, board: &Board) -> Option<Move> {
        if board.is_terminal() {
            return None;
        }
        self.search(board).best_move
    }

    /// Play both sides optimally until the game ends
    pub fn play_game(&self, initial: Board) -> (Board, Vec<Move>) {
        let mut board = initial;
        let mut history = Vec::new();

        while let Some(mv) = self.best_move(&board) {
            board = board.with_mark(mv, board.current_player());
            history.push(mv);
            tracing::debug!(%mv, board = %board, "self-play move");
        }

        (board, history)
    }
}

impl Default for MinimaxAI {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ALPHA-BETA
// ============================================================================

fn max_value(
    board: &Board,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> (i32, Option<Move>) {
    stats.nodes += 1;
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let player = board.current_player();
    let mut value = NEG_INFINITY;
    let mut best = None;

    for mv in board.legal_moves() {
        let (child_value, _) = min_value(&board.with_mark(mv, player), alpha, beta, stats);
        if child_value > value {
            value = child_value;
            best = Some(mv);
        }
        alpha = alpha.max(value);
        if value >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    (value, best)
}

fn min_value(
    board: &Board,
    alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> (i32, Option<Move>) {
    stats.nodes += 1;
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let player = board.current_player();
    let mut value = INFINITY;
    let mut best = None;

    for mv in board.legal_moves() {
        let (child_value, _) = max_value(&board.with_mark(mv, player), alpha, beta, stats);
        if child_value < value {
            value = child_value;
            best = Some(mv);
        }
        beta = beta.min(value);
        if value <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    (value, best)
}

// ============================================================================
// PLAIN MINIMAX
// ============================================================================

fn minimax_value(board: &Board, stats: &mut SearchStats) -> (i32, Option<Move>) {
    stats.nodes += 1;
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let player = board.current_player();
    let mut value = match player {
        Player::X => NEG_INFINITY,
        Player::O => INFINITY,
    };
    let mut best = None;

    for mv in board.legal_moves() {
        let (child_value, _) = minimax_value(&board.with_mark(mv, player), stats);
        let improves = match player {
            Player::X => child_value > value,
            Player::O => child_value < value,
        };
        if improves {
            value = child_value;
            best = Some(mv);
        }
    }

    (value, best)
}

// ============================================================================
// TESTS
// ============================================================================

//! Exhaustive analysis of the reachable state space
//!
//! The whole game has only a few thousand distinct boards, so they can be
//! enumerated outright. This is used for sanity statistics and to check
//! the pruned search against plain minimax on every position.

use crate::ai::{minimax, search, SearchResult};
use crate::game::{Board, Outcome};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Distinct reachable boards broken down by verdict
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub total: usize,
    pub terminal: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

/// Alpha-beta vs plain minimax over every open reachable board
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PruningReport {
    /// Non-terminal boards searched
    pub boards: usize,
    /// Boards where the two searches disagreed on move or value
    pub mismatches: Vec<Board>,
    /// Nodes visited by alpha-beta, summed over all boards
    pub pruned_nodes: u64,
    /// Nodes visited by plain minimax, summed over all boards
    pub full_nodes: u64,
}

impl PruningReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Fraction of the full tree that alpha-beta skipped
    pub fn savings(&self) -> f64 {
        if self.full_nodes == 0 {
            0.0
        } else {
            1.0 - self.pruned_nodes as f64 / self.full_nodes as f64
        }
    }
}

/// Every board reachable from the empty board, breadth-first.
///
/// Children are generated in row-major move order, and terminal boards are
/// not expanded, so the result is deterministic.
pub fn reachable_boards() -> Vec<Board> {
    let root = Board::initial();
    let mut seen = FxHashSet::default();
    let mut queue = VecDeque::new();
    let mut boards = Vec::new();

    seen.insert(root);
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        boards.push(board);
        if board.is_terminal() {
            continue;
        }

        let player = board.current_player();
        for mv in board.legal_moves() {
            let child = board.with_mark(mv, player);
            if seen.insert(child) {
                queue.push_back(child);
            }
        }
    }

    tracing::debug!(count = boards.len(), "enumerated reachable boards");
    boards
}

/// Count reachable boards by verdict
pub fn census() -> Census {
    census_of(&reachable_boards())
}

pub fn census_of(boards: &[Board]) -> Census {
    let mut census = Census {
        total: boards.len(),
        ..Census::default()
    };

    for board in boards {
        match board.outcome() {
            Outcome::XWins => census.x_wins += 1,
            Outcome::OWins => census.o_wins += 1,
            Outcome::Draw => census.draws += 1,
            Outcome::Undetermined => continue,
        }
        census.terminal += 1;
    }

    census
}

/// Run both searches on every open reachable board and compare
pub fn verify_pruning() -> PruningReport {
    let open: Vec<Board> = reachable_boards()
        .into_iter()
        .filter(|b| !b.is_terminal())
        .collect();

    let mut report = PruningReport {
        boards: open.len(),
        ..PruningReport::default()
    };

    for (board, pruned, full) in compare_searches(&open) {
        report.pruned_nodes += pruned.stats.nodes;
        report.full_nodes += full.stats.nodes;
        if pruned.best_move != full.best_move || pruned.value != full.value {
            tracing::warn!(
                board = %board,
                pruned = ?pruned.best_move,
                full = ?full.best_move,
                "alpha-beta disagrees with minimax"
            );
            report.mismatches.push(board);
        }
    }

    report
}

// ============================================================================
// BOARD COMPARISON
// ============================================================================

fn compare_one(board: &Board) -> (Board, SearchResult, SearchResult) {
    (*board, search(board), minimax(board))
}

/// Each board is searched independently, so they can run on any thread
#[cfg(feature = "parallel")]
fn compare_searches(boards: &[Board]) -> Vec<(Board, SearchResult, SearchResult)> {
    use rayon::prelude::*;

    boards.par_iter().map(compare_one).collect()
}

#[cfg(not(feature = "parallel"))]
fn compare_searches(boards: &[Board]) -> Vec<(Board, SearchResult, SearchResult)> {
    boards.iter().map(compare_one).collect()
}

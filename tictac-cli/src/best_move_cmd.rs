//! Best-move command - solve a single position
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: report_text(), report_json()
//! - Level 4: render_board()

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use tictac_core::{search, Board, Move, Outcome, Player, SearchResult};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BestMoveArgs {
    /// Board in compact notation, e.g. "XX./OO./..." (rows may omit the slashes)
    #[arg(long, default_value = ".........")]
    pub board: Board,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run best-move command
pub fn run(args: BestMoveArgs) -> Result<()> {
    let board = args.board;
    let result = search(&board);

    tracing::info!(
        "Searched {} ({} nodes, {} cutoffs)",
        board,
        result.stats.nodes,
        result.stats.cutoffs
    );

    if args.json {
        report_json(&board, &result)
    } else {
        report_text(&board, &result);
        Ok(())
    }
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn report_json(board: &Board, result: &SearchResult) -> Result<()> {
    #[derive(Serialize)]
    struct JsonOutput {
        board: Board,
        to_move: Player,
        outcome: Outcome,
        best_move: Option<Move>,
        value: i32,
        nodes: u64,
        cutoffs: u64,
    }

    let output = JsonOutput {
        board: *board,
        to_move: board.current_player(),
        outcome: board.outcome(),
        best_move: result.best_move,
        value: result.value,
        nodes: result.stats.nodes,
        cutoffs: result.stats.cutoffs,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn report_text(board: &Board, result: &SearchResult) {
    println!("{}", render_board(board));

    match result.best_move {
        None => println!("Game over: {}", describe_outcome(board.outcome())),
        Some(mv) => {
            println!("{} to move", board.current_player());
            println!("Best move:  {}", mv);
            println!("Value:      {} ({})", result.value, describe_value(result.value));
        }
    }
    println!("Nodes:      {}", result.stats.nodes);
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Three-line grid, e.g.
///
/// ```text
///  X | X | .
/// ---+---+---
///  O | O | .
/// ```
pub fn render_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!(" {} ", cell.to_char()))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn describe_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::XWins => "X wins",
        Outcome::OWins => "O wins",
        Outcome::Draw => "draw",
        Outcome::Undetermined => "undetermined",
    }
}

fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X wins with best play",
        -1 => "O wins with best play",
        _ => "draw with best play",
    }
}

// ============================================================================
// TESTS
// ============================================================================

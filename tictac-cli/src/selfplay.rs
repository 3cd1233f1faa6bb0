//! Selfplay command - the engine plays both sides from a position

use anyhow::{bail, Result};
use clap::Args;

use tictac_core::{Board, MinimaxAI};

use crate::best_move_cmd::{describe_outcome, render_board};

#[derive(Args)]
pub struct SelfplayArgs {
    /// Starting position (defaults to the empty board)
    #[arg(long, default_value = ".........")]
    pub board: Board,

    /// Disable alpha-beta pruning (same moves, full tree)
    #[arg(long)]
    pub no_pruning: bool,
}

/// Run selfplay command
pub fn run(args: SelfplayArgs) -> Result<()> {
    let (x, o) = args.board.mark_counts();
    if x != o && x != o + 1 {
        bail!(
            "board {} is not reachable: {} X marks vs {} O marks",
            args.board,
            x,
            o
        );
    }

    let ai = if args.no_pruning {
        MinimaxAI::without_pruning()
    } else {
        MinimaxAI::new()
    };

    let (end, history) = ai.play_game(args.board);

    // Replay for display; every move came from legal_moves
    let mut board = args.board;
    for (ply, mv) in history.iter().enumerate() {
        let player = board.current_player();
        board = board.apply_move(*mv)?;
        println!("{:>2}. {} {}", ply + 1, player, mv);
    }

    println!("\n{}\n", render_board(&end));
    println!("Result: {}", describe_outcome(end.outcome()));

    tracing::info!("Selfplay finished after {} moves: {:?}", history.len(), end.outcome());
    Ok(())
}

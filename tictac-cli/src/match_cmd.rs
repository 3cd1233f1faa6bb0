//! Match command - play the engine against a random mover
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tictac_core::{Board, MinimaxAI, Move, Outcome, Player};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play (the engine alternates sides, starting as X)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    engine_side: Player,
    outcome: Outcome,
    moves: Vec<Move>,
}

impl GameRecord {
    fn engine_won(&self) -> bool {
        matches!(
            (self.engine_side, self.outcome),
            (Player::X, Outcome::XWins) | (Player::O, Outcome::OWins)
        )
    }

    fn engine_lost(&self) -> bool {
        matches!(
            (self.engine_side, self.outcome),
            (Player::X, Outcome::OWins) | (Player::O, Outcome::XWins)
        )
    }
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    engine_wins: usize,
    engine_losses: usize,
    draws: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// This function reads like a table of contents:
/// 1. Play the match (multiple games)
/// 2. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    tracing::info!("Starting match: engine vs random ({} games)", args.games);

    let results = play_match(&args, seed);

    if results.engine_losses > 0 {
        tracing::warn!("Engine lost {} games", results.engine_losses);
    }

    report_results(&results, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(args: &MatchArgs, seed: Option<u64>) -> MatchResults {
    let mut rng = create_rng(seed);
    let ai = MinimaxAI::new();
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        // Alternate colors for fairness
        let engine_side = if game_num % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        let record = play_single_game(&ai, engine_side, game_num + 1, &mut rng);

        tracing::info!(
            "Game {}: engine as {} -> {:?} ({} moves)",
            record.game_number,
            record.engine_side,
            record.outcome,
            record.moves.len()
        );

        games.push(record);
    }

    compute_match_statistics(games)
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) -> Result<()> {
    if args.json {
        print_json_results(results)
    } else {
        print_text_results(results);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game from the empty board
fn play_single_game(
    ai: &MinimaxAI,
    engine_side: Player,
    game_number: usize,
    rng: &mut ChaCha8Rng,
) -> GameRecord {
    let mut board = Board::initial();
    let mut moves = Vec::new();

    while !board.is_terminal() {
        let choice = if board.current_player() == engine_side {
            ai.best_move(&board)
        } else {
            random_move(&board, rng)
        };

        let Some(mv) = choice else { break };
        match board.apply_move(mv) {
            Ok(next) => board = next,
            Err(err) => {
                tracing::error!("Game {}: rejected move {}: {}", game_number, mv, err);
                break;
            }
        }
        moves.push(mv);
    }

    GameRecord {
        game_number,
        engine_side,
        outcome: board.outcome(),
        moves,
    }
}

/// Uniformly random legal move
fn random_move(board: &Board, rng: &mut ChaCha8Rng) -> Option<Move> {
    board.legal_moves().choose(rng).copied()
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let engine_wins = games.iter().filter(|g| g.engine_won()).count();
    let engine_losses = games.iter().filter(|g| g.engine_lost()).count();
    let draws = games
        .iter()
        .filter(|g| g.outcome == Outcome::Draw)
        .count();

    let total_moves: usize = games.iter().map(|g| g.moves.len()).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        engine_wins,
        engine_losses,
        draws,
        avg_moves,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        engine_side: Player,
        outcome: Outcome,
        moves: Vec<Move>,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        engine_wins: usize,
        engine_losses: usize,
        draws: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        engine_wins: results.engine_wins,
        engine_losses: results.engine_losses,
        draws: results.draws,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                engine_side: g.engine_side,
                outcome: g.outcome,
                moves: g.moves.clone(),
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games:   {}", total);
    println!(
        "Engine wins:   {} ({:.1}%)",
        results.engine_wins,
        percent(results.engine_wins, total)
    );
    println!(
        "Engine losses: {} ({:.1}%)",
        results.engine_losses,
        percent(results.engine_losses, total)
    );
    println!(
        "Draws:         {} ({:.1}%)",
        results.draws,
        percent(results.draws, total)
    );
    println!("Avg moves:     {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: engine as {}, {:?} in {} moves",
            game.game_number,
            game.engine_side,
            game.outcome,
            game.moves.len()
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_match_statistics_empty() {
        let results = compute_match_statistics(vec![]);
        assert_eq!(results.engine_wins, 0);
        assert_eq!(results.engine_losses, 0);
        assert_eq!(results.draws, 0);
        assert_eq!(results.avg_moves, 0.0);
    }

    #[test]
    fn test_compute_match_statistics() {
        let record = |n, side, outcome, len| GameRecord {
            game_number: n,
            engine_side: side,
            outcome,
            moves: vec![Move::new(0, 0); len],
        };
        let games = vec![
            record(1, Player::X, Outcome::XWins, 7),
            record(2, Player::O, Outcome::Draw, 9),
            record(3, Player::O, Outcome::XWins, 5),
        ];

        let results = compute_match_statistics(games);
        assert_eq!(results.engine_wins, 1);
        assert_eq!(results.engine_losses, 1);
        assert_eq!(results.draws, 1);
        assert_eq!(results.avg_moves, 7.0);
    }

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(Some(42));
        let mut rng2 = create_rng(Some(42));

        use rand::Rng;
        assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
    }

    #[test]
    fn test_engine_never_loses_to_random() {
        let args = MatchArgs {
            games: 6,
            json: false,
        };
        let results = play_match(&args, Some(7));

        assert_eq!(results.games.len(), 6);
        assert_eq!(results.engine_losses, 0);
        assert!(results.games.iter().all(|g| g.outcome != Outcome::Undetermined));
    }

    #[test]
    fn test_random_move_is_legal() {
        let board: Board = "XOX/.O./...".parse().unwrap();
        let mut rng = create_rng(Some(1));
        for _ in 0..20 {
            let mv = random_move(&board, &mut rng).unwrap();
            assert!(board.apply_move(mv).is_ok());
        }
        assert_eq!(random_move(&"XOX/XOO/OXX".parse::<Board>().unwrap(), &mut rng), None);
    }
}

//! TICTAC CLI - Command-line interface
//!
//! Commands:
//! - best-move: Solve a single position
//! - selfplay: Engine plays both sides to the end
//! - match: Engine against a random mover
//! - analyze: State-space census and search verification
//! - serve: Start the HTTP API

mod analyze;
mod best_move_cmd;
mod match_cmd;
mod selfplay;
mod server;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictac")]
#[command(about = "Perfect-play tic-tac-toe engine")]
struct Cli {
    /// Seed for anything random (entropy when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    BestMove(best_move_cmd::BestMoveArgs),
    /// Play a game with the engine on both sides
    Selfplay(selfplay::SelfplayArgs),
    /// Play the engine against a random mover
    Match(match_cmd::MatchArgs),
    /// Enumerate reachable positions
    Analyze(analyze::AnalyzeArgs),
    /// Start the HTTP API server
    Serve(server::ServerArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BestMove(args) => best_move_cmd::run(args),
        Commands::Selfplay(args) => selfplay::run(args),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
        Commands::Analyze(args) => analyze::run(args),
        Commands::Serve(args) => server::run(args),
    }
}

//! Analyze command - state-space census and search verification

use std::time::Instant;

use anyhow::{bail, Result};
use clap::Args;

use tictac_core::{census, verify_pruning, Census, PruningReport};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Also compare alpha-beta against plain minimax on every open position
    #[arg(long)]
    pub verify: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run analyze command
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let start = Instant::now();
    let counts = census();
    tracing::info!("Census done in {:?}", start.elapsed());

    let report = if args.verify {
        let start = Instant::now();
        let report = verify_pruning();
        tracing::info!(
            "Verified {} positions in {:?}",
            report.boards,
            start.elapsed()
        );
        Some(report)
    } else {
        None
    };

    if args.json {
        let output = serde_json::json!({
            "census": counts,
            "pruning": report,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_census(&counts);
        if let Some(report) = &report {
            print_report(report);
        }
    }

    if let Some(report) = &report {
        if !report.is_consistent() {
            bail!(
                "alpha-beta disagreed with minimax on {} positions",
                report.mismatches.len()
            );
        }
    }

    Ok(())
}

fn print_census(counts: &Census) {
    println!("=== Reachable Positions ===");
    println!("Total:     {}", counts.total);
    println!("Open:      {}", counts.total - counts.terminal);
    println!("Terminal:  {}", counts.terminal);
    println!("  X wins:  {}", counts.x_wins);
    println!("  O wins:  {}", counts.o_wins);
    println!("  Draws:   {}", counts.draws);
}

fn print_report(report: &PruningReport) {
    println!("\n=== Alpha-Beta vs Minimax ===");
    println!("Positions:     {}", report.boards);
    println!("Mismatches:    {}", report.mismatches.len());
    println!("Minimax nodes: {}", report.full_nodes);
    println!("Pruned nodes:  {}", report.pruned_nodes);
    println!("Saved:         {:.1}%", report.savings() * 100.0);
}

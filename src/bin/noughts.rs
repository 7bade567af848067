//! noughts CLI - Exhaustive minimax solver for tic-tac-toe
//!
//! This CLI provides:
//! - Optimal move and value for any reachable position
//! - Games between optimal and random strategies
//! - Optimal-vs-random evaluation runs
//! - Export of the solved policy (JSON or CSV)
//! - Game-tree statistics

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{self, GlobalArgs, commands};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Exhaustive minimax solver for tic-tac-toe", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimal move and value for a position
    BestMove(commands::best_move::BestMoveArgs),

    /// Play one game between two strategies
    Play(commands::play::PlayArgs),

    /// Evaluate optimal play against a random opponent
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Export the optimal policy for every reachable position
    Solve(commands::solve::SolveArgs),

    /// Game-tree statistics
    Tree(commands::tree::TreeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.global.verbose);

    match cli.command {
        Commands::BestMove(args) => commands::best_move::execute(args, &cli.global),
        Commands::Play(args) => commands::play::execute(args, &cli.global),
        Commands::Evaluate(args) => commands::evaluate::execute(args, &cli.global),
        Commands::Solve(args) => commands::solve::execute(args, &cli.global),
        Commands::Tree(args) => commands::tree::execute(args),
    }
}

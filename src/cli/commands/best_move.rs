//! Best-move command - Optimal move and value for a single position

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        GlobalArgs,
        output::{print_board, print_kv, print_section, print_subsection},
    },
    search::Minimax,
    tictactoe::{Board, Outcome, rules},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for a position")]
pub struct BestMoveArgs {
    /// Board as nine cells of X, O and . in row-major order (e.g. "XX.OO....")
    #[arg(long, short = 'b')]
    pub board: String,

    /// Also list the value of every legal move
    #[arg(long)]
    pub all: bool,
}

pub fn execute(args: BestMoveArgs, global: &GlobalArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    board.ensure_reachable()?;

    let config = global.search_config()?;
    let mut search = Minimax::new(config);

    print_section("Position");
    print_board(&board);
    println!();
    print_kv("To move", &rules::current_player(&board).to_string());

    let outcome = rules::outcome(&board);
    if outcome.is_decided() {
        let result = match outcome {
            Outcome::XWins => "X wins",
            Outcome::OWins => "O wins",
            _ => "draw",
        };
        print_kv("Game over", result);
        print_kv("Value", &rules::utility(&board).to_string());
        return Ok(());
    }

    let evaluation = search.evaluate(&board);
    let stats = search.stats();
    if let Some(mv) = evaluation.best_move {
        print_kv("Best move", &mv.to_string());
    }
    print_kv("Value (for X)", &evaluation.value.to_string());
    print_kv("Nodes searched", &stats.nodes.to_string());

    if args.all {
        print_subsection("Move values (for X)");
        let optimal = search.optimal_moves(&board);
        for (mv, value) in search.evaluate_moves(&board) {
            let marker = if optimal.contains(&mv) { "*" } else { "" };
            println!("  {:8} {value:>3} {marker}", mv.to_string());
        }
    }

    Ok(())
}

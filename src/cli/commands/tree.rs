//! Tree command - Statistics of the reachable state space

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::{format_number, format_percent, print_section, print_stats_table, print_subsection},
    tictactoe::{GameTree, count_games},
};

#[derive(Parser, Debug)]
#[command(about = "Print game-tree statistics")]
pub struct TreeArgs {
    /// Skip counting complete games
    #[arg(long)]
    pub positions_only: bool,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let tree = GameTree::enumerate();
    let counts = tree.position_counts();

    print_section("Game Tree");
    print_subsection("Positions");
    print_stats_table(&[
        ("Reachable", format_number(counts.positions)),
        ("Terminal", format_number(counts.terminal)),
        ("X wins", format_number(counts.x_wins)),
        ("O wins", format_number(counts.o_wins)),
        ("Draws", format_number(counts.draws)),
        ("Up to symmetry", format_number(counts.canonical_positions)),
        ("Terminal (sym.)", format_number(counts.canonical_terminal)),
    ]);

    if args.positions_only {
        return Ok(());
    }

    let games = count_games();
    print_subsection("Complete games");
    print_stats_table(&[
        ("Games", format_number(games.games)),
        (
            "X wins",
            format!(
                "{} ({})",
                format_number(games.x_wins),
                format_percent(games.x_wins, games.games)
            ),
        ),
        (
            "O wins",
            format!(
                "{} ({})",
                format_number(games.o_wins),
                format_percent(games.o_wins, games.games)
            ),
        ),
        (
            "Draws",
            format!(
                "{} ({})",
                format_number(games.draws),
                format_percent(games.draws, games.games)
            ),
        ),
    ]);

    Ok(())
}

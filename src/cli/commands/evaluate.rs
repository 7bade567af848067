//! Evaluate command - Optimal play against a random baseline

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    Error,
    cli::{
        GlobalArgs, parse_player_token,
        output::{format_number, format_percent, print_section, print_stats_table},
    },
    pipeline::{MatchSummary, OptimalStrategy, RandomStrategy, Strategy, play_series},
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play the optimal strategy against a random opponent")]
pub struct EvaluateArgs {
    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Which token the optimal strategy controls (`x` or `o`)
    #[arg(long, value_parser = parse_player_token, default_value = "x")]
    pub optimal_plays: Player,

    /// Random seed for the opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: EvaluateArgs, global: &GlobalArgs) -> Result<()> {
    if args.games == 0 {
        return Err(Error::InvalidConfiguration {
            message: "--games must be at least 1".to_string(),
        }
        .into());
    }

    let config = global.search_config()?;
    let mut optimal = OptimalStrategy::new("Optimal".to_string(), config);
    let mut random = match args.seed {
        Some(seed) => RandomStrategy::with_seed("Random".to_string(), seed),
        None => RandomStrategy::new("Random".to_string()),
    };

    let summary = match args.optimal_plays {
        Player::X => play_series(&mut optimal, &mut random, args.games)?,
        Player::O => play_series(&mut random, &mut optimal, args.games)?,
    };

    print_summary(&summary, optimal.name(), args.optimal_plays);

    let losses = summary.losses(args.optimal_plays);
    if losses > 0 {
        bail!("optimal strategy lost {losses} of {} games", summary.games);
    }
    Ok(())
}

fn print_summary(summary: &MatchSummary, optimal_name: &str, optimal_plays: Player) {
    let wins = summary.losses(optimal_plays.opponent());
    let losses = summary.losses(optimal_plays);
    let wins_key = format!("{optimal_name} win rate");
    let losses_key = format!("{optimal_name} losses");

    print_section(&format!("{} (X) vs {} (O)", summary.x_name, summary.o_name));
    print_stats_table(&[
        ("Games", format_number(summary.games)),
        ("X wins", format_number(summary.x_wins)),
        ("O wins", format_number(summary.o_wins)),
        ("Draws", format_number(summary.draws)),
        (wins_key.as_str(), format_percent(wins, summary.games)),
        (losses_key.as_str(), format_number(losses)),
    ]);
}

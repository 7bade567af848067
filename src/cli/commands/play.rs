//! Play command - One game between two strategies, printed move by move

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        GlobalArgs, StrategyKind,
        output::{print_board, print_kv, print_section},
    },
    pipeline::play_game,
    tictactoe::{Outcome, rules},
};

#[derive(Parser, Debug)]
#[command(about = "Play a single game and print every position")]
pub struct PlayArgs {
    /// Strategy controlling X
    #[arg(long, value_enum, default_value = "optimal")]
    pub x: StrategyKind,

    /// Strategy controlling O
    #[arg(long, value_enum, default_value = "optimal")]
    pub o: StrategyKind,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs, global: &GlobalArgs) -> Result<()> {
    let config = global.search_config()?;
    let mut x = args.x.build(config, args.seed);
    let mut o = args.o.build(config, args.seed.map(|seed| seed.wrapping_add(1)));

    let game = play_game(x.as_mut(), o.as_mut())?;

    print_section(&format!("{} (X) vs {} (O)", x.name(), o.name()));
    let mut board = rules::initial_state();
    for (ply, played) in game.moves().iter().enumerate() {
        board = rules::apply_move(&board, played.mv)?;
        println!("\nMove {}: {} plays {}", ply + 1, played.player, played.mv);
        print_board(&board);
    }

    println!();
    let result = match game.outcome() {
        Outcome::XWins => "X wins",
        Outcome::OWins => "O wins",
        Outcome::Draw => "draw",
        Outcome::InProgress => "unfinished",
    };
    print_kv("Result", result);
    print_kv("Moves", &game.moves().len().to_string());

    Ok(())
}

//! Playing games between two strategies

use serde::Serialize;
use tracing::{debug, trace};

use crate::{
    Result,
    ports::Strategy,
    tictactoe::{Game, Outcome, Player, rules},
};

/// Tally of finished games between the same two strategies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub x_name: String,
    pub o_name: String,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    pub fn new(x_name: &str, o_name: &str) -> Self {
        Self {
            x_name: x_name.to_string(),
            o_name: o_name.to_string(),
            ..Self::default()
        }
    }

    /// Record one finished game
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::XWins => self.x_wins += 1,
            Outcome::OWins => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Games lost by `player`
    pub fn losses(&self, player: Player) -> usize {
        match player {
            Player::X => self.o_wins,
            Player::O => self.x_wins,
        }
    }
}

/// Play one game from the empty board, X moving first.
///
/// # Errors
///
/// Propagates strategy errors and rejects illegal moves with the rule
/// engine's [`crate::Error::IllegalMove`].
pub fn play_game(x: &mut dyn Strategy, o: &mut dyn Strategy) -> Result<Game> {
    let mut game = Game::new();

    while !game.is_over() {
        let board = *game.board();
        let strategy: &mut dyn Strategy = match rules::current_player(&board) {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let mv = strategy.select_move(&board)?;
        trace!(strategy = strategy.name(), %mv, "move selected");
        game.play(mv)?;
    }

    debug!(
        x = x.name(),
        o = o.name(),
        outcome = ?game.outcome(),
        moves = game.moves().len(),
        "game finished"
    );
    Ok(game)
}

/// Play `games` games with the same seating and tally the outcomes
pub fn play_series(
    x: &mut dyn Strategy,
    o: &mut dyn Strategy,
    games: usize,
) -> Result<MatchSummary> {
    let mut summary = MatchSummary::new(x.name(), o.name());
    for _ in 0..games {
        let game = play_game(x, o)?;
        summary.record(game.outcome());
    }
    Ok(summary)
}

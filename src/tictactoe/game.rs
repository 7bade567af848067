//! In-memory record of one game

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Move, Player},
    rules::{self, Outcome},
};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// A game in progress or finished, with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<PlayedMove>,
}

impl Game {
    /// Start a game from the empty board
    pub fn new() -> Self {
        Self::from_position(rules::initial_state())
    }

    /// Start a game from an arbitrary position
    pub fn from_position(board: Board) -> Self {
        Game {
            board,
            moves: Vec::new(),
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the position is already terminal,
    /// or the rule engine's [`crate::Error::IllegalMove`] unchanged.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, crate::Error> {
        if rules::is_terminal(&self.board) {
            return Err(crate::Error::GameOver);
        }

        let player = rules::current_player(&self.board);
        self.board = rules::apply_move(&self.board, mv)?;
        self.moves.push(PlayedMove { mv, player });

        Ok(self.outcome())
    }

    /// Current position
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far
    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    pub fn is_over(&self) -> bool {
        rules::is_terminal(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_history_and_outcome() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(game.play(Move::new(row, col)).unwrap(), Outcome::InProgress);
        }
        assert_eq!(game.play(Move::new(0, 2)).unwrap(), Outcome::XWins);

        let players: Vec<Player> = game.moves().iter().map(|m| m.player).collect();
        assert_eq!(
            players,
            vec![Player::X, Player::O, Player::X, Player::O, Player::X]
        );
        assert!(game.is_over());
    }

    #[test]
    fn test_play_after_game_over_fails() {
        let mut game = Game::from_position(Board::from_string("XXXOO....").unwrap());
        assert!(matches!(
            game.play(Move::new(2, 2)),
            Err(crate::Error::GameOver)
        ));
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_illegal_move_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(Move::new(1, 1)).unwrap();
        let before = *game.board();

        assert!(matches!(
            game.play(Move::new(1, 1)),
            Err(crate::Error::IllegalMove { .. })
        ));
        assert_eq!(*game.board(), before);
        assert_eq!(game.moves().len(), 1);
    }
}

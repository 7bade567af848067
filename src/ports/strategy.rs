//! Strategy port - abstraction over anything that picks moves
//!
//! The minimax searcher and the random baseline both implement this trait,
//! so match play and the command-line front end can pit any two against
//! each other.

use crate::{
    Result,
    tictactoe::{Board, Move},
};

/// Move selection for one side of a game
///
/// # Examples
///
/// ```
/// use noughts::{
///     Result,
///     ports::Strategy,
///     tictactoe::{Board, Move, legal_moves},
/// };
///
/// /// Always plays the first empty cell
/// struct FirstEmpty;
///
/// impl Strategy for FirstEmpty {
///     fn select_move(&mut self, board: &Board) -> Result<Move> {
///         legal_moves(board)
///             .into_iter()
///             .next()
///             .ok_or(noughts::Error::NoValidMoves)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
/// ```
pub trait Strategy: Send {
    /// Choose a move for the side to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoValidMoves`] if the position is terminal.
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Name used in logs and reports
    fn name(&self) -> &str;
}

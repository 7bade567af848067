//! Game rules for tic-tac-toe.
//!
//! Pure functions answering whose turn it is, which moves are legal, what a
//! move produces and whether the game is over. None of them mutate their
//! input; [`apply_move`] is the only one that can fail.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{
    board::{Board, Cell, Move, Player},
    lines::LineAnalyzer,
};
use crate::error::IllegalMoveReason;

/// Status of a position, derived from its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl Outcome {
    /// Whether the game has ended
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }
}

/// The empty starting position
pub fn initial_state() -> Board {
    Board::new()
}

/// Player whose turn it is.
///
/// X moves whenever it has placed no more marks than O, so X opens. The
/// answer is defined for every board, terminal ones included.
pub fn current_player(board: &Board) -> Player {
    if board.count(Cell::X) <= board.count(Cell::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Every empty cell, ordered row-major. Empty for a full board.
pub fn legal_moves(board: &Board) -> BTreeSet<Move> {
    board.empty_indices().map(Move::from_index).collect()
}

/// Place the current player's mark at `mv` and return the new board.
///
/// # Errors
///
/// Returns [`crate::Error::IllegalMove`] if `mv` is off the board or the
/// target cell is already occupied.
#[instrument(level = "trace", skip(board), fields(board = %board.encode()))]
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, crate::Error> {
    let illegal = |reason| crate::Error::IllegalMove {
        row: mv.row,
        col: mv.col,
        reason,
    };

    let index = mv.index().ok_or_else(|| illegal(IllegalMoveReason::OutOfRange))?;
    if !board.is_empty_at(index) {
        return Err(illegal(IllegalMoveReason::Occupied));
    }

    Ok(board.with_cell(index, current_player(board).to_cell()))
}

/// Every legal move paired with the board it produces, in row-major order.
pub fn successors(board: &Board) -> impl Iterator<Item = (Move, Board)> + '_ {
    let mark = current_player(board).to_cell();
    board
        .empty_indices()
        .map(move |idx| (Move::from_index(idx), board.with_cell(idx, mark)))
}

/// The player holding a complete row, column or diagonal, if any
pub fn winner(board: &Board) -> Option<Player> {
    if LineAnalyzer::has_won(board.cells(), Player::X) {
        Some(Player::X)
    } else if LineAnalyzer::has_won(board.cells(), Player::O) {
        Some(Player::O)
    } else {
        None
    }
}

/// Check if the game is over (win or full board)
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Value of the position for X: 1 if X won, -1 if O won, 0 otherwise.
///
/// Only meaningful on terminal boards; a non-terminal board scores 0.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

/// Classify the position
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(Player::X) => Outcome::XWins,
        Some(Player::O) => Outcome::OWins,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

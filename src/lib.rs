//! Exhaustive minimax solver for tic-tac-toe
//!
//! This crate provides:
//! - Immutable board model and rule engine (turns, legal moves, wins, utility)
//! - Minimax search with deterministic tie-breaking, optional alpha-beta
//!   pruning and a symmetry-aware transposition cache
//! - Reachable state-space enumeration and game counting
//! - Match play between strategies and policy export

pub mod cli;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, IllegalMoveReason, Result};
pub use search::{Evaluation, Minimax, Pruning, SearchConfig, TieBreak, best_move};
pub use tictactoe::{
    Board, Cell, Move, Outcome, Player, apply_move, current_player, initial_state, is_terminal,
    legal_moves, utility, winner,
};

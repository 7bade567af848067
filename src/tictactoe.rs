//! Tic-Tac-Toe board model and rule engine

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod rules;
pub mod symmetry;
pub mod validation;

pub use board::{Board, Cell, Move, Player};
pub use game::{Game, PlayedMove};
pub use game_tree::{GameCounts, GameTree, PositionCounts, count_games};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{
    Outcome, apply_move, current_player, initial_state, is_terminal, legal_moves, outcome,
    successors, utility, winner,
};
pub use symmetry::D4Transform;

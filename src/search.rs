//! Adversarial game-tree search

pub mod config;
pub mod minimax;

pub use config::{Pruning, SearchConfig, TieBreak};
pub use minimax::{Evaluation, Minimax, SearchStats, best_move, max_value, min_value};

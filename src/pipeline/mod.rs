//! Match play between strategies
//!
//! This module provides:
//! - Strategy implementations (optimal minimax, random baseline)
//! - Game and series runners with outcome tallies

pub mod arena;
pub mod strategies;

pub use arena::{MatchSummary, play_game, play_series};
pub use strategies::{OptimalStrategy, RandomStrategy};

pub use crate::ports::Strategy;

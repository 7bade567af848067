//! Common test utilities for the noughts test suite.

#![allow(dead_code)]

use noughts::{
    search::{Pruning, SearchConfig, TieBreak},
    tictactoe::{Board, Cell},
};

/// Parse a board literal, panicking on malformed input
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|err| panic!("bad board literal {s:?}: {err}"))
}

/// Every combination of tie-break, pruning and cache settings
pub fn all_configs() -> Vec<SearchConfig> {
    let mut configs = Vec::new();
    for tie_break in [TieBreak::Last, TieBreak::First] {
        for pruning in [Pruning::Exhaustive, Pruning::AlphaBeta] {
            for transposition in [false, true] {
                configs.push(
                    SearchConfig::new()
                        .with_tie_break(tie_break)
                        .with_pruning(pruning)
                        .with_transposition(transposition),
                );
            }
        }
    }
    configs
}

/// All 3^9 cell assignments, reachable or not
pub fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|index| {
        let mut n = index;
        let mut cells = [Cell::Empty; 9];
        for slot in (0..9).rev() {
            cells[slot] = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            n /= 3;
        }
        Board::from_cells(cells)
    })
}

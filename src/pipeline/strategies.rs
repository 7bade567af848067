//! Concrete strategies: optimal (minimax) play and a random baseline

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Strategy,
    search::{Minimax, SearchConfig},
    tictactoe::{Board, Move, rules},
};

/// Optimal play backed by a [`Minimax`] searcher
pub struct OptimalStrategy {
    name: String,
    search: Minimax,
}

impl OptimalStrategy {
    pub fn new(name: String, config: SearchConfig) -> Self {
        Self {
            name,
            search: Minimax::new(config),
        }
    }

    pub fn search(&self) -> &Minimax {
        &self.search
    }
}

impl Strategy for OptimalStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        self.search.best_move(board).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random legal moves (baseline)
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy seeded from the OS
    pub fn new(name: String) -> Self {
        Self::with_seed(name, rand::random())
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        if rules::is_terminal(board) {
            return Err(Error::NoValidMoves);
        }
        let moves: Vec<Move> = rules::legal_moves(board).into_iter().collect();
        moves.choose(&mut self.rng).copied().ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_strategy_plays_legal_moves() {
        let mut strategy = RandomStrategy::with_seed("Random".to_string(), 7);
        let board = Board::from_string("XO.XO....").unwrap();
        for _ in 0..20 {
            let mv = strategy.select_move(&board).unwrap();
            assert!(rules::legal_moves(&board).contains(&mv));
        }
    }

    #[test]
    fn test_random_strategy_is_reproducible() {
        let board = Board::new();
        let mut a = RandomStrategy::with_seed("A".to_string(), 42);
        let mut b = RandomStrategy::with_seed("B".to_string(), 42);
        for _ in 0..5 {
            assert_eq!(a.select_move(&board).unwrap(), b.select_move(&board).unwrap());
        }
    }

    #[test]
    fn test_strategies_refuse_terminal_positions() {
        let won = Board::from_string("XXXOO....").unwrap();
        let mut optimal = OptimalStrategy::new("Optimal".to_string(), SearchConfig::default());
        let mut random = RandomStrategy::with_seed("Random".to_string(), 1);
        assert!(matches!(optimal.select_move(&won), Err(Error::NoValidMoves)));
        assert!(matches!(random.select_move(&won), Err(Error::NoValidMoves)));
    }

    #[test]
    fn test_optimal_strategy_takes_the_win() {
        let mut optimal = OptimalStrategy::new("Optimal".to_string(), SearchConfig::default());
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(optimal.select_move(&board).unwrap(), Move::new(0, 2));
        assert!(optimal.search().stats().nodes > 0);
    }
}

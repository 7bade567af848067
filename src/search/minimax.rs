//! Exhaustive minimax search.
//!
//! The maximizing (X) and minimizing (O) evaluators are one negamax routine:
//! scores are kept from the perspective of the evaluating side and flipped
//! at each ply. Values handed to callers are always X-relative utilities in
//! `{-1, 0, 1}`.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, instrument};

use super::config::{Pruning, SearchConfig, TieBreak};
use crate::tictactoe::{Board, Move, Player, rules};

/// Larger than any reachable score; used as an open window bound
const INFINITY: i32 = i32::MAX / 2;

/// Result of evaluating a position for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Selected move, `None` on terminal positions
    pub best_move: Option<Move>,
    /// Game-theoretic value for X under optimal play by both sides
    pub value: i32,
}

/// Work done by the most recent root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub cache_hits: u64,
    pub cutoffs: u64,
}

/// Minimax searcher.
///
/// Holds its configuration and, when enabled, a transposition cache keyed by
/// canonical position and evaluating side. The cache only ever stores exact
/// values, so it survives across calls without affecting results.
///
/// # Examples
///
/// ```
/// use noughts::search::Minimax;
/// use noughts::tictactoe::{Board, Move};
///
/// let board = Board::from_string("XX. / OO. / ...").unwrap();
/// let mut search = Minimax::default();
/// assert_eq!(search.best_move(&board), Some(Move::new(0, 2)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    config: SearchConfig,
    cache: HashMap<(Board, Player), i32>,
    stats: SearchStats,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cache: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last root search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of cached position values
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Optimal move for the side to move, or `None` if the game is over
    #[instrument(level = "debug", skip(self, board), fields(board = %board.encode()))]
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        if rules::is_terminal(board) {
            return None;
        }
        self.evaluate(board).best_move
    }

    /// Evaluate the position for the side to move
    pub fn evaluate(&mut self, board: &Board) -> Evaluation {
        self.evaluate_for(board, rules::current_player(board))
    }

    /// Maximizing evaluator: X chooses at the root
    pub fn max_value(&mut self, board: &Board) -> Evaluation {
        self.evaluate_for(board, Player::X)
    }

    /// Minimizing evaluator: O chooses at the root
    pub fn min_value(&mut self, board: &Board) -> Evaluation {
        self.evaluate_for(board, Player::O)
    }

    /// Exact X-relative value of every legal move, in row-major order
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<(Move, i32)> {
        self.stats = SearchStats::default();
        if rules::is_terminal(board) {
            return Vec::new();
        }

        let reply = rules::current_player(board).opponent();
        let moves = rules::successors(board)
            .map(|(mv, child)| {
                let score = self.negamax(&child, reply, -INFINITY, INFINITY);
                (mv, reply.sign() * score)
            })
            .collect();
        self.log_stats(board);
        moves
    }

    /// Every move achieving the optimal value, in row-major order
    pub fn optimal_moves(&mut self, board: &Board) -> Vec<Move> {
        let sign = rules::current_player(board).sign();
        let scored = self.evaluate_moves(board);
        let Some(best) = scored.iter().map(|&(_, value)| sign * value).max() else {
            return Vec::new();
        };
        scored
            .into_iter()
            .filter(|&(_, value)| sign * value == best)
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Root search with `player` choosing among the legal moves.
    ///
    /// Each candidate after the first is searched with a window whose lower
    /// bound sits just below the score it has to reach to replace the
    /// incumbent under the configured tie-break. Any score that would be
    /// accepted is therefore exact, and pruned and exhaustive searches pick
    /// the same move.
    fn evaluate_for(&mut self, board: &Board, player: Player) -> Evaluation {
        self.stats = SearchStats::default();
        if rules::is_terminal(board) {
            return Evaluation {
                best_move: None,
                value: rules::utility(board),
            };
        }

        let tie_break = self.config.tie_break;
        let mut best: Option<(Move, i32)> = None;

        for (mv, child) in rules::successors(board) {
            let floor = match (best, tie_break) {
                (None, _) => -INFINITY,
                (Some((_, incumbent)), TieBreak::Last) => incumbent - 1,
                (Some((_, incumbent)), TieBreak::First) => incumbent,
            };
            let score = -self.negamax(&child, player.opponent(), -INFINITY, -floor);

            let replaces = match best {
                None => true,
                Some((_, incumbent)) => match tie_break {
                    TieBreak::Last => score >= incumbent,
                    TieBreak::First => score > incumbent,
                },
            };
            if replaces {
                best = Some((mv, score));
            }
        }

        self.log_stats(board);

        match best {
            Some((mv, score)) => Evaluation {
                best_move: Some(mv),
                value: player.sign() * score,
            },
            // Non-terminal boards always have an empty cell
            None => Evaluation {
                best_move: None,
                value: rules::utility(board),
            },
        }
    }

    /// Fail-soft negamax score of `board` from `player`'s perspective.
    ///
    /// Exact when the result lies strictly inside `(alpha, beta)`, and always
    /// exact without pruning.
    fn negamax(&mut self, board: &Board, player: Player, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;

        if rules::is_terminal(board) {
            return player.sign() * rules::utility(board);
        }

        let key = self.config.transposition.then(|| (board.canonical(), player));
        if let Some(key) = &key {
            if let Some(&value) = self.cache.get(key) {
                self.stats.cache_hits += 1;
                return player.sign() * value;
            }
        }

        let pruning = self.config.pruning == Pruning::AlphaBeta;
        let alpha_orig = alpha;
        let mut best = -INFINITY;

        for (_, child) in rules::successors(board) {
            let score = -self.negamax(&child, player.opponent(), -beta, -alpha);
            best = best.max(score);
            if pruning {
                alpha = alpha.max(score);
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        let exact = !pruning || (alpha_orig < best && best < beta);
        if let Some(key) = key {
            if exact {
                self.cache.insert(key, player.sign() * best);
            }
        }

        best
    }

    fn log_stats(&self, board: &Board) {
        debug!(
            board = %board.encode(),
            nodes = self.stats.nodes,
            cache_hits = self.stats.cache_hits,
            cutoffs = self.stats.cutoffs,
            "search complete"
        );
    }
}

/// Optimal move for the side to move using the default configuration
pub fn best_move(board: &Board) -> Option<Move> {
    Minimax::default().best_move(board)
}

/// Maximizing evaluator using the default configuration
pub fn max_value(board: &Board) -> Evaluation {
    Minimax::default().max_value(board)
}

/// Minimizing evaluator using the default configuration
pub fn min_value(board: &Board) -> Evaluation {
    Minimax::default().min_value(board)
}

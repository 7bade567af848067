//! Enumeration of the reachable state space

use std::collections::{BTreeSet, HashSet, VecDeque};

use serde::Serialize;

use super::{
    board::{Board, Player},
    rules,
};

/// Every position reachable from the empty board under legal play.
///
/// Positions are stored in board order, so iteration is deterministic.
#[derive(Debug, Clone)]
pub struct GameTree {
    positions: BTreeSet<Board>,
}

/// Counts over distinct positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PositionCounts {
    pub positions: usize,
    pub terminal: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub canonical_positions: usize,
    pub canonical_terminal: usize,
}

/// Counts over complete move sequences from the empty board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GameCounts {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl GameTree {
    /// Breadth-first enumeration from the empty board. Terminal positions
    /// are included but not expanded.
    pub fn enumerate() -> Self {
        let root = rules::initial_state();
        let mut positions = BTreeSet::new();
        let mut queue = VecDeque::from([root]);
        positions.insert(root);

        while let Some(board) = queue.pop_front() {
            if rules::is_terminal(&board) {
                continue;
            }
            for (_, next) in rules::successors(&board) {
                if positions.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        GameTree { positions }
    }

    pub fn positions(&self) -> impl Iterator<Item = &Board> {
        self.positions.iter()
    }

    /// Positions where a move is still to be made
    pub fn decision_positions(&self) -> impl Iterator<Item = &Board> {
        self.positions.iter().filter(|b| !rules::is_terminal(b))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.positions.contains(board)
    }

    /// Tally positions by outcome, with and without symmetry reduction
    pub fn position_counts(&self) -> PositionCounts {
        let mut counts = PositionCounts {
            positions: self.positions.len(),
            ..PositionCounts::default()
        };
        let mut canonical = HashSet::new();
        let mut canonical_terminal = HashSet::new();

        for board in &self.positions {
            let canon = board.canonical();
            canonical.insert(canon);
            if !rules::is_terminal(board) {
                continue;
            }
            counts.terminal += 1;
            canonical_terminal.insert(canon);
            match rules::winner(board) {
                Some(Player::X) => counts.x_wins += 1,
                Some(Player::O) => counts.o_wins += 1,
                None => counts.draws += 1,
            }
        }

        counts.canonical_positions = canonical.len();
        counts.canonical_terminal = canonical_terminal.len();
        counts
    }
}

/// Count every complete game (distinct move sequence) from the empty board
pub fn count_games() -> GameCounts {
    fn traverse(board: &Board, counts: &mut GameCounts) {
        if rules::is_terminal(board) {
            counts.games += 1;
            match rules::winner(board) {
                Some(Player::X) => counts.x_wins += 1,
                Some(Player::O) => counts.o_wins += 1,
                None => counts.draws += 1,
            }
            return;
        }
        for (_, next) in rules::successors(board) {
            traverse(&next, counts);
        }
    }

    let mut counts = GameCounts::default();
    traverse(&rules::initial_state(), &mut counts);
    counts
}

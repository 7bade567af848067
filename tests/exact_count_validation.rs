mod common;

use std::collections::HashSet;

use common::all_boards;
use noughts::tictactoe::{Board, Cell, GameTree, Player, count_games, is_terminal, winner};

#[test]
fn verify_state_space_counts() {
    const TOTAL_CONFIGURATIONS: usize = 19_683; // 3^9
    const TURN_VALID_STATES: usize = 6_046;
    const VALID_STATES: usize = 5_478;
    const CANONICAL_STATES: usize = 765;
    const DISTINCT_TERMINALS: usize = 958;
    const CANONICAL_TERMINALS: usize = 138;

    let mut total = 0usize;
    let mut turn_valid = 0usize;
    let mut reachable = HashSet::new();

    for board in all_boards() {
        total += 1;
        let x = board.count(Cell::X);
        let o = board.count(Cell::O);
        if x == o || x == o + 1 {
            turn_valid += 1;
        }
        if board.is_reachable() {
            reachable.insert(board);
        }
    }

    assert_eq!(total, TOTAL_CONFIGURATIONS);
    assert_eq!(turn_valid, TURN_VALID_STATES);
    assert_eq!(reachable.len(), VALID_STATES);

    // The static reachability check and forward enumeration agree exactly
    let tree = GameTree::enumerate();
    let enumerated: HashSet<Board> = tree.positions().copied().collect();
    assert_eq!(reachable, enumerated);

    let counts = tree.position_counts();
    assert_eq!(counts.positions, VALID_STATES);
    assert_eq!(counts.terminal, DISTINCT_TERMINALS);
    assert_eq!(counts.canonical_positions, CANONICAL_STATES);
    assert_eq!(counts.canonical_terminal, CANONICAL_TERMINALS);
}

#[test]
fn verify_terminal_outcome_counts() {
    let tree = GameTree::enumerate();
    let counts = tree.position_counts();
    assert_eq!(counts.x_wins, 626);
    assert_eq!(counts.o_wins, 316);
    assert_eq!(counts.draws, 16);

    let mut canonical_x = HashSet::new();
    let mut canonical_o = HashSet::new();
    let mut canonical_draws = HashSet::new();
    for board in tree.positions().filter(|b| is_terminal(b)) {
        let canonical = board.canonical();
        match winner(board) {
            Some(Player::X) => canonical_x.insert(canonical),
            Some(Player::O) => canonical_o.insert(canonical),
            None => canonical_draws.insert(canonical),
        };
    }
    assert_eq!(canonical_x.len(), 91);
    assert_eq!(canonical_o.len(), 44);
    assert_eq!(canonical_draws.len(), 3);
}

#[test]
fn verify_canonical_states_per_ply() {
    const EXPECTED_PER_PLY: [usize; 10] = [
        1, // ply 0
        3, 12, 38, 108, 174, 204, 153, 57, 15,
    ];

    let tree = GameTree::enumerate();
    let mut per_ply: Vec<HashSet<Board>> = (0..10).map(|_| HashSet::new()).collect();
    for board in tree.positions() {
        per_ply[board.occupied_count()].insert(board.canonical());
    }

    for (ply, &expected) in EXPECTED_PER_PLY.iter().enumerate() {
        assert_eq!(
            per_ply[ply].len(),
            expected,
            "canonical state count mismatch at ply {ply}"
        );
    }
}

#[test]
fn verify_game_counts() {
    let games = count_games();
    assert_eq!(games.games, 255_168);
    assert_eq!(games.x_wins, 131_184);
    assert_eq!(games.o_wins, 77_904);
    assert_eq!(games.draws, 46_080);
    assert_eq!(games.x_wins + games.o_wins + games.draws, games.games);
}

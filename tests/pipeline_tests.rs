//! Match play and policy export

mod common;

use common::board;
use noughts::{
    export::{PolicyFormat, solve_policy, write_policy},
    pipeline::{OptimalStrategy, RandomStrategy, Strategy, play_game, play_series},
    search::{Pruning, SearchConfig, TieBreak},
    tictactoe::{Outcome, Player, apply_move, initial_state},
};

fn fast_config() -> SearchConfig {
    SearchConfig::new()
        .with_pruning(Pruning::AlphaBeta)
        .with_transposition(true)
}

#[test]
fn optimal_never_loses_to_random_as_x() {
    let mut optimal = OptimalStrategy::new("Optimal".to_string(), fast_config());
    for seed in 0..5 {
        let mut random = RandomStrategy::with_seed("Random".to_string(), seed);
        let summary = play_series(&mut optimal, &mut random, 60).unwrap();
        assert_eq!(summary.games, 60);
        assert_eq!(summary.losses(Player::X), 0, "seed {seed}: {summary:?}");
        assert!(summary.x_wins > 0);
    }
}

#[test]
fn optimal_never_loses_to_random_as_o() {
    let mut optimal = OptimalStrategy::new(
        "Optimal".to_string(),
        fast_config().with_tie_break(TieBreak::First),
    );
    for seed in 10..15 {
        let mut random = RandomStrategy::with_seed("Random".to_string(), seed);
        let summary = play_series(&mut random, &mut optimal, 60).unwrap();
        assert_eq!(summary.losses(Player::O), 0, "seed {seed}: {summary:?}");
    }
}

#[test]
fn optimal_self_play_is_a_draw() {
    let mut x = OptimalStrategy::new("X".to_string(), fast_config());
    let mut o = OptimalStrategy::new("O".to_string(), SearchConfig::default());
    let game = play_game(&mut x, &mut o).unwrap();
    assert_eq!(game.outcome(), Outcome::Draw);
    assert_eq!(game.moves().len(), 9);
}

#[test]
fn recorded_moves_replay_to_the_final_board() {
    let mut x = RandomStrategy::with_seed("A".to_string(), 3);
    let mut o = OptimalStrategy::new("B".to_string(), fast_config());
    let game = play_game(&mut x, &mut o).unwrap();

    let mut replay = initial_state();
    for (ply, played) in game.moves().iter().enumerate() {
        let expected = if ply % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(played.player, expected);
        replay = apply_move(&replay, played.mv).unwrap();
    }
    assert_eq!(&replay, game.board());
    assert_eq!(x.name(), "A");
}

#[test]
fn policy_exports_as_json() {
    let config = fast_config();
    let records = solve_policy(config);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.json");

    write_policy(&records, config, &path, PolicyFormat::Json).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["total_positions"], 4_520);
    assert_eq!(json["config"]["pruning"], "alpha_beta");
    let policy = json["policy"].as_array().unwrap();
    assert_eq!(policy.len(), 4_520);

    let threat = board("XX. / OO. / ...").encode();
    let entry = policy
        .iter()
        .find(|entry| entry["board"] == threat.as_str())
        .unwrap();
    assert_eq!(entry["best_row"], 0);
    assert_eq!(entry["best_col"], 2);
    assert_eq!(entry["value"], 1);
    assert_eq!(entry["to_move"], "X");
}

#[test]
fn policy_exports_as_csv() {
    let config = fast_config();
    let records = solve_policy(config);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.csv");

    write_policy(&records, config, &path, PolicyFormat::Csv).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("board,to_move,best_row,best_col,value,optimal_moves")
    );
    assert_eq!(lines.count(), records.len());
}

#[test]
fn export_to_missing_directory_fails_with_io_error() {
    let records = solve_policy(fast_config());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("policy.json");
    let err = write_policy(&records, fast_config(), &path, PolicyFormat::Json).unwrap_err();
    assert!(matches!(err, noughts::Error::Io { .. }));
}

//! Export of the solved optimal policy
//!
//! One record per reachable non-terminal position: the move the searcher
//! plays, the position's value and every move that achieves it.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use tracing::info;

use crate::{
    Error, Result,
    search::{Minimax, SearchConfig},
    tictactoe::{GameTree, rules},
};

/// A single row of the exported policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyRecord {
    /// Nine-character board encoding
    pub board: String,
    /// Side to move (`X` or `O`)
    pub to_move: char,
    pub best_row: usize,
    pub best_col: usize,
    /// X-relative value under optimal play
    pub value: i32,
    /// All optimal moves as `row:col` pairs separated by spaces
    pub optimal_moves: String,
}

/// Output format of [`write_policy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyFormat {
    Json,
    Csv,
}

#[derive(Serialize)]
struct PolicyDocument<'a> {
    description: &'static str,
    config: SearchConfig,
    total_positions: usize,
    policy: &'a [PolicyRecord],
}

/// Solve every reachable decision position
pub fn solve_policy(config: SearchConfig) -> Vec<PolicyRecord> {
    let tree = GameTree::enumerate();
    let mut search = Minimax::new(config);
    let mut records = Vec::new();

    for board in tree.decision_positions() {
        let evaluation = search.evaluate(board);
        let Some(best) = evaluation.best_move else {
            continue;
        };
        let optimal = search
            .optimal_moves(board)
            .iter()
            .map(|mv| format!("{}:{}", mv.row, mv.col))
            .collect::<Vec<_>>()
            .join(" ");

        records.push(PolicyRecord {
            board: board.encode(),
            to_move: rules::current_player(board).to_cell().to_char(),
            best_row: best.row,
            best_col: best.col,
            value: evaluation.value,
            optimal_moves: optimal,
        });
    }

    info!(positions = records.len(), "solved optimal policy");
    records
}

/// Write policy records to `path` in the requested format
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be written, or the encoder's
/// error for the chosen format.
pub fn write_policy(
    records: &[PolicyRecord],
    config: SearchConfig,
    path: &Path,
    format: PolicyFormat,
) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;

    match format {
        PolicyFormat::Json => {
            let mut writer = BufWriter::new(file);
            let document = PolicyDocument {
                description: "Optimal (minimax) policy for tic-tac-toe",
                config,
                total_positions: records.len(),
                policy: records,
            };
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writer.flush()?;
        }
        PolicyFormat::Csv => {
            let mut writer = csv::Writer::from_writer(file);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_covers_every_decision_position() {
        let config = SearchConfig::new().with_transposition(true);
        let records = solve_policy(config);
        let tree = GameTree::enumerate();
        assert_eq!(records.len(), tree.decision_positions().count());

        let root = records
            .iter()
            .find(|r| r.board == ".........")
            .expect("empty board is a decision position");
        assert_eq!(root.value, 0);
        assert_eq!(root.to_move, 'X');
        assert_eq!((root.best_row, root.best_col), (2, 2));
        assert_eq!(root.optimal_moves.split(' ').count(), 9);
    }
}

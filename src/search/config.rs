//! Configuration for the minimax searcher.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which of several equally good moves the search returns.
///
/// Candidates are enumerated row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The last-enumerated optimal move wins (`>=` / `<=` running comparison)
    #[default]
    Last,
    /// The first-enumerated optimal move wins (strict comparison)
    First,
}

/// Whether the search prunes branches that cannot affect the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Pruning {
    /// Visit every node of the game tree
    #[default]
    Exhaustive,
    /// Alpha-beta cutoffs; the selected move is identical to `Exhaustive`
    AlphaBeta,
}

/// Configuration for a [`Minimax`](super::Minimax) searcher.
///
/// # Examples
///
/// ```
/// use noughts::search::{Pruning, SearchConfig, TieBreak};
///
/// let config = SearchConfig::new()
///     .with_tie_break(TieBreak::First)
///     .with_pruning(Pruning::AlphaBeta)
///     .with_transposition(true);
/// assert!(config.transposition);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Policy among equally valued moves
    pub tie_break: TieBreak,
    /// Branch pruning strategy
    pub pruning: Pruning,
    /// Cache exact values of symmetric positions across the search
    pub transposition: bool,
}

impl SearchConfig {
    /// Plain exhaustive search: no pruning, no cache, last-move tie-break
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_transposition(mut self, enabled: bool) -> Self {
        self.transposition = enabled;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if the JSON is malformed or
    /// names an unknown policy.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }
}

//! Shared configuration for CLI commands

use std::{fs, path::PathBuf};

use clap::{Args, ValueEnum};

use crate::{
    Error, Result,
    pipeline::{OptimalStrategy, RandomStrategy, Strategy},
    search::{Pruning, SearchConfig, TieBreak},
    tictactoe::Player,
};

/// Search options accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// JSON file with a search configuration; flags below override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Policy among equally good moves
    #[arg(long, global = true, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// Branch pruning strategy
    #[arg(long, global = true, value_enum)]
    pub pruning: Option<Pruning>,

    /// Enable the transposition cache
    #[arg(long, global = true)]
    pub cache: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Resolve the effective search configuration
    ///
    /// # Errors
    ///
    /// Fails if the configuration file cannot be read or parsed.
    pub fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|source| Error::Io {
                    operation: format!("read {}", path.display()),
                    source,
                })?;
                SearchConfig::from_json(&json)?
            }
            None => SearchConfig::default(),
        };

        if let Some(tie_break) = self.tie_break {
            config = config.with_tie_break(tie_break);
        }
        if let Some(pruning) = self.pruning {
            config = config.with_pruning(pruning);
        }
        if self.cache {
            config = config.with_transposition(true);
        }
        Ok(config)
    }
}

/// Strategies selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Optimal,
    Random,
}

impl StrategyKind {
    /// Build a boxed strategy of this kind
    pub fn build(self, config: SearchConfig, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Optimal => Box::new(OptimalStrategy::new("Optimal".to_string(), config)),
            StrategyKind::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::with_seed("Random".to_string(), seed)),
                None => Box::new(RandomStrategy::new("Random".to_string())),
            },
        }
    }
}

/// Parse a player token (`x` or `o`, case-insensitive)
pub fn parse_player_token(value: &str) -> std::result::Result<Player, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(format!("invalid player '{other}'; expected 'x' or 'o'")),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn flags_override_file_configuration() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tie_break": "first", "pruning": "alpha_beta" }}"#).unwrap();

        let args = GlobalArgs {
            config: Some(file.path().to_path_buf()),
            pruning: Some(Pruning::Exhaustive),
            cache: true,
            ..GlobalArgs::default()
        };
        let config = args.search_config().unwrap();
        assert_eq!(config.tie_break, TieBreak::First);
        assert_eq!(config.pruning, Pruning::Exhaustive);
        assert!(config.transposition);
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let args = GlobalArgs {
            config: Some(PathBuf::from("/nonexistent/noughts.json")),
            ..GlobalArgs::default()
        };
        assert!(matches!(args.search_config(), Err(Error::Io { .. })));
    }

    #[test]
    fn player_tokens() {
        assert_eq!(parse_player_token("X"), Ok(Player::X));
        assert_eq!(parse_player_token(" o "), Ok(Player::O));
        assert!(parse_player_token("z").is_err());
    }
}

//! CLI infrastructure for the noughts solver
//!
//! This module provides the command-line interface for querying optimal
//! moves, playing and evaluating matches, exporting the solved policy and
//! inspecting the game tree.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

pub use config::{GlobalArgs, StrategyKind, parse_player_token};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `-v` raises the default `warn`
/// level to `info`, `-vv` to `debug` and `-vvv` to `trace`.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

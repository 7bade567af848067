//! Ports (trait boundaries) between the game core and its callers.

pub mod strategy;

pub use strategy::Strategy;

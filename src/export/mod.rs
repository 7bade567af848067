//! Export functionality for solved positions
//!
//! This module provides JSON and CSV export of the optimal policy.

pub mod policy;

pub use policy::{PolicyFormat, PolicyRecord, solve_policy, write_policy};

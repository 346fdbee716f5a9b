//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{Ranking, print_leaderboard, print_round, print_round_result, print_user};

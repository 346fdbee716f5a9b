//! Command implementations

pub mod account;
pub mod leaderboard;
pub mod simple;

pub use account::{register, remove, user_info};
pub use leaderboard::leaderboard;
pub use simple::run_simple;

//! Use cases consumed by the CLI and TUI
//!
//! Each use case borrows a repository through one of the capability traits, so
//! any backend can be plugged in.

mod account;
mod leaderboard;
mod play_game;

pub use account::AccountUseCase;
pub use leaderboard::LeaderboardUseCase;
pub use play_game::PlayGameUseCase;

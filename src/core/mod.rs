//! Core domain types for hangman
//!
//! Pure in-memory types with no I/O: the secret word, the round state machine
//! and the player record.

mod game;
pub mod guess_word;
mod user;

pub use game::{Game, RoundStatus};
pub use guess_word::GuessWord;
pub use user::{User, is_valid_user_name};

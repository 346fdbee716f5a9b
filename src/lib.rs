//! Hangman
//!
//! A terminal hangman game with username-only accounts, a root user and a
//! leaderboard, persisted in two flat text files.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::repository::MemoryRepository;
//! use hangman::usecases::PlayGameUseCase;
//!
//! let words = MemoryRepository::with_words(["racecar"]);
//! let mut play = PlayGameUseCase::new(&words);
//! play.start_game().unwrap();
//!
//! play.make_guess('a').unwrap();
//! assert_eq!(play.guess_view().unwrap(), "-a---a-");
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Word and user persistence
pub mod repository;

// Use cases driven by the CLI
pub mod usecases;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{HangmanError, Result};

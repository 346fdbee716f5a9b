//! Runtime configuration
//!
//! Settings come from command-line flags (with environment fallbacks for the
//! two file paths); everything else uses the defaults below.

use std::path::PathBuf;

/// Word bank file used when no path is given
pub const DEFAULT_WORD_BANK_PATH: &str = "word_bank.txt";

/// User records file used when no path is given
pub const DEFAULT_USERS_PATH: &str = "users.txt";

/// Wrong guesses that end a round
pub const DEFAULT_MAX_WRONG_GUESSES: u32 = 6;

/// Configuration for a hangman session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_bank_path: PathBuf,
    pub users_path: PathBuf,
    pub max_wrong_guesses: u32,
}

impl GameConfig {
    #[must_use]
    pub fn new(word_bank_path: impl Into<PathBuf>, users_path: impl Into<PathBuf>) -> Self {
        Self {
            word_bank_path: word_bank_path.into(),
            users_path: users_path.into(),
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
        }
    }

    /// Override the strike limit; zero is raised to one
    #[must_use]
    pub fn with_max_wrong_guesses(mut self, max_wrong_guesses: u32) -> Self {
        self.max_wrong_guesses = max_wrong_guesses.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_BANK_PATH, DEFAULT_USERS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.word_bank_path, PathBuf::from("word_bank.txt"));
        assert_eq!(config.users_path, PathBuf::from("users.txt"));
        assert_eq!(config.max_wrong_guesses, 6);
    }

    #[test]
    fn strike_limit_is_at_least_one() {
        let config = GameConfig::default().with_max_wrong_guesses(0);
        assert_eq!(config.max_wrong_guesses, 1);

        let config = GameConfig::default().with_max_wrong_guesses(10);
        assert_eq!(config.max_wrong_guesses, 10);
    }
}

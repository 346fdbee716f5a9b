//! Secret word and its partially revealed view
//!
//! A `GuessWord` stores the word being guessed alongside the view shown to the
//! player, where every hidden position is rendered as `-`.

use crate::error::{HangmanError, Result};
use std::fmt;

/// Placeholder for a position that has not been revealed yet
pub const HIDDEN: char = '-';

/// Shortest word accepted as a secret
pub const MIN_WORD_LEN: usize = 7;

/// Longest word accepted as a secret
pub const MAX_WORD_LEN: usize = 21;

/// A secret word together with the letters revealed so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessWord {
    word: String,
    view: String,
}

/// Check whether `word` can be used as a secret word
///
/// Valid secrets are 7-21 characters drawn from `a-z` only.
#[must_use]
pub fn is_valid_guess_word(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_lowercase())
}

/// Check whether `guess` is a letter the player may guess
#[inline]
#[must_use]
pub const fn is_valid_guess(guess: char) -> bool {
    guess.is_ascii_lowercase()
}

impl GuessWord {
    /// Create a new secret word with a fully hidden view
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidWord` unless `word` is 7-21 lowercase
    /// ASCII letters. No case folding is applied.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessWord;
    ///
    /// let word = GuessWord::new("racecar").unwrap();
    /// assert_eq!(word.view(), "-------");
    ///
    /// assert!(GuessWord::new("short").is_err());
    /// assert!(GuessWord::new("RaceCar").is_err());
    /// ```
    pub fn new(word: impl Into<String>) -> Result<Self> {
        let word = word.into();
        if !is_valid_guess_word(&word) {
            return Err(HangmanError::InvalidWord(word));
        }

        let view = HIDDEN.to_string().repeat(word.len());
        Ok(Self { word, view })
    }

    /// Reveal every hidden position holding `guess`
    ///
    /// Returns `true` iff at least one hidden position was revealed by this
    /// call. Guessing a letter that is absent, or one that is already fully
    /// revealed, returns `false`. Revealed positions are never overwritten.
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidGuess` for anything outside `a-z`; the
    /// view is left untouched.
    pub fn update_guess_view(&mut self, guess: char) -> Result<bool> {
        if !is_valid_guess(guess) {
            return Err(HangmanError::InvalidGuess(guess));
        }

        let mut revealed = false;
        let view: String = self
            .word
            .chars()
            .zip(self.view.chars())
            .map(|(secret, shown)| {
                if shown == HIDDEN && secret == guess {
                    revealed = true;
                    secret
                } else {
                    shown
                }
            })
            .collect();

        self.view = view;
        Ok(revealed)
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The current view, with `-` for each hidden position
    #[inline]
    #[must_use]
    pub fn view(&self) -> &str {
        &self.view
    }

    /// Number of positions revealed so far
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.view.chars().filter(|&c| c != HIDDEN).count()
    }

    /// True once no position remains hidden
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        !self.view.contains(HIDDEN)
    }
}

impl fmt::Display for GuessWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.view)
    }
}

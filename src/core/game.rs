//! Per-round hangman session
//!
//! A `Game` wraps a [`GuessWord`] and keeps track of the letters tried and the
//! number of wrong guesses. It does not decide on its own when a round is over;
//! callers ask for a [`RoundStatus`] against a strike limit.

use super::GuessWord;
use super::guess_word::is_valid_guess;
use crate::error::{HangmanError, Result};
use rustc_hash::FxHashSet;

/// Outcome of a round checked against a strike limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single hangman round
#[derive(Debug, Clone)]
pub struct Game {
    guess_word: GuessWord,
    letters_guessed: FxHashSet<char>,
    num_wrong_guesses: u32,
}

impl Game {
    /// Start a round for `word_to_guess`
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidWord` if the word is not 7-21 lowercase
    /// letters.
    pub fn new(word_to_guess: impl Into<String>) -> Result<Self> {
        Ok(Self {
            guess_word: GuessWord::new(word_to_guess)?,
            letters_guessed: FxHashSet::default(),
            num_wrong_guesses: 0,
        })
    }

    /// Guess a letter
    ///
    /// Records the letter, updates the view and counts a strike when nothing
    /// new was revealed. Returns whether the guess revealed anything.
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidGuess` for characters outside `a-z`. In
    /// that case neither the guessed letters nor the strike count change.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Game;
    ///
    /// let mut game = Game::new("racecar").unwrap();
    /// assert!(game.make_guess('a').unwrap());
    /// assert!(!game.make_guess('z').unwrap());
    /// assert_eq!(game.guess_view(), "-a---a-");
    /// assert_eq!(game.num_wrong_guesses(), 1);
    /// ```
    pub fn make_guess(&mut self, guess: char) -> Result<bool> {
        if !is_valid_guess(guess) {
            return Err(HangmanError::InvalidGuess(guess));
        }

        let revealed = self.guess_word.update_guess_view(guess)?;
        self.letters_guessed.insert(guess);
        if !revealed {
            self.num_wrong_guesses += 1;
        }

        Ok(revealed)
    }

    /// A copy of the letters guessed so far
    #[must_use]
    pub fn letters_guessed(&self) -> FxHashSet<char> {
        self.letters_guessed.clone()
    }

    /// Letters guessed so far in alphabetical order
    #[must_use]
    pub fn letters_guessed_sorted(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.letters_guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[inline]
    #[must_use]
    pub fn guess_view(&self) -> &str {
        self.guess_word.view()
    }

    #[inline]
    #[must_use]
    pub const fn num_wrong_guesses(&self) -> u32 {
        self.num_wrong_guesses
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.guess_word.word()
    }

    #[must_use]
    pub fn is_fully_guessed(&self) -> bool {
        self.guess_word.is_fully_revealed()
    }

    /// Evaluate the round against `max_wrong_guesses` strikes
    ///
    /// The round is lost as soon as the strike count reaches the limit, and won
    /// once every position is revealed while still under it.
    #[must_use]
    pub fn status(&self, max_wrong_guesses: u32) -> RoundStatus {
        if self.num_wrong_guesses >= max_wrong_guesses {
            RoundStatus::Lost
        } else if self.is_fully_guessed() {
            RoundStatus::Won
        } else {
            RoundStatus::InProgress
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_empty() {
        let game = Game::new("racecar").unwrap();
        assert_eq!(game.guess_view(), "-------");
        assert_eq!(game.num_wrong_guesses(), 0);
        assert!(game.letters_guessed().is_empty());
    }

    #[test]
    fn new_game_rejects_invalid_word() {
        assert!(matches!(
            Game::new("cat"),
            Err(HangmanError::InvalidWord(_))
        ));
    }

    #[test]
    fn racecar_scenario_has_no_strikes() {
        let mut game = Game::new("racecar").unwrap();

        assert!(game.make_guess('a').unwrap());
        assert_eq!(game.guess_view(), "-a---a-");
        assert!(game.make_guess('e').unwrap());
        assert_eq!(game.guess_view(), "-a-e-a-");
        assert!(game.make_guess('c').unwrap());
        assert_eq!(game.guess_view(), "-aceca-");

        assert_eq!(game.num_wrong_guesses(), 0);
        assert_eq!(game.letters_guessed_sorted(), vec!['a', 'c', 'e']);
    }

    #[test]
    fn invalid_guess_changes_nothing() {
        let mut game = Game::new("racecar").unwrap();

        assert!(matches!(
            game.make_guess('&'),
            Err(HangmanError::InvalidGuess('&'))
        ));
        assert_eq!(game.guess_view(), "-------");
        assert!(game.letters_guessed().is_empty());
        assert_eq!(game.num_wrong_guesses(), 0);

        assert!(game.make_guess('A').is_err());
        assert!(game.letters_guessed().is_empty());
    }

    #[test]
    fn wrong_and_repeated_guesses_count_as_strikes() {
        let mut game = Game::new("racecar").unwrap();

        assert!(!game.make_guess('z').unwrap());
        assert!(!game.make_guess('z').unwrap());
        assert!(game.make_guess('r').unwrap());
        assert!(!game.make_guess('r').unwrap());

        assert_eq!(game.num_wrong_guesses(), 3);
        assert_eq!(game.letters_guessed().len(), 2);
    }

    #[test]
    fn letters_guessed_is_a_copy() {
        let mut game = Game::new("racecar").unwrap();
        game.make_guess('a').unwrap();

        let mut letters = game.letters_guessed();
        letters.insert('q');
        letters.remove(&'a');

        assert!(game.letters_guessed().contains(&'a'));
        assert!(!game.letters_guessed().contains(&'q'));
    }

    #[test]
    fn status_won_when_fully_revealed() {
        let mut game = Game::new("racecar").unwrap();
        for guess in ['r', 'a', 'c'] {
            game.make_guess(guess).unwrap();
        }
        assert_eq!(game.status(6), RoundStatus::InProgress);

        game.make_guess('e').unwrap();
        assert_eq!(game.status(6), RoundStatus::Won);
        assert!(game.status(6).is_over());
    }

    #[test]
    fn status_lost_at_strike_limit() {
        let mut game = Game::new("racecar").unwrap();
        for guess in ['b', 'd', 'f', 'g', 'h'] {
            game.make_guess(guess).unwrap();
        }
        assert_eq!(game.status(6), RoundStatus::InProgress);

        game.make_guess('i').unwrap();
        assert_eq!(game.num_wrong_guesses(), 6);
        assert_eq!(game.status(6), RoundStatus::Lost);
    }

    #[test]
    fn status_lost_takes_precedence_at_limit() {
        let mut game = Game::new("racecar").unwrap();
        game.make_guess('z').unwrap();
        for guess in ['r', 'a', 'c', 'e'] {
            game.make_guess(guess).unwrap();
        }
        // Fully revealed but already at a one-strike limit
        assert_eq!(game.status(1), RoundStatus::Lost);
        assert_eq!(game.status(2), RoundStatus::Won);
    }
}

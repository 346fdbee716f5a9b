//! Round orchestration
//!
//! Fetches a word from the word repository, drives a [`Game`] and reports the
//! win/lose conditions against the configured strike limit.

use crate::config::DEFAULT_MAX_WRONG_GUESSES;
use crate::core::{Game, RoundStatus};
use crate::error::{HangmanError, Result};
use crate::repository::WordRepository;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

pub struct PlayGameUseCase<'a, W: WordRepository + ?Sized> {
    words: &'a W,
    game: Option<Game>,
    max_wrong_guesses: u32,
}

impl<'a, W: WordRepository + ?Sized> PlayGameUseCase<'a, W> {
    pub const fn new(words: &'a W) -> Self {
        Self {
            words,
            game: None,
            max_wrong_guesses: DEFAULT_MAX_WRONG_GUESSES,
        }
    }

    /// Use a different strike limit; zero is raised to one
    #[must_use]
    pub fn with_max_wrong_guesses(mut self, max_wrong_guesses: u32) -> Self {
        self.max_wrong_guesses = max_wrong_guesses.max(1);
        self
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong_guesses
    }

    /// Replace any current round with a new one on a random word
    ///
    /// # Errors
    /// `Repo` if no word can be fetched, `InvalidWord` if the fetched word is
    /// not a valid secret. The previous round is kept on error.
    pub fn start_game(&mut self) -> Result<()> {
        let word = self.words.random_word()?;
        self.game = Some(Game::new(word)?);
        info!("round started");
        Ok(())
    }

    /// The current round, if one was started
    #[must_use]
    pub const fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    fn active_game(&self) -> Result<&Game> {
        self.game.as_ref().ok_or(HangmanError::NoActiveRound)
    }

    /// Guess a letter in the current round
    ///
    /// # Errors
    /// `NoActiveRound` before [`start_game`](Self::start_game), `InvalidGuess`
    /// for characters outside `a-z`.
    pub fn make_guess(&mut self, guess: char) -> Result<bool> {
        let game = self.game.as_mut().ok_or(HangmanError::NoActiveRound)?;
        let revealed = game.make_guess(guess)?;
        debug!(%guess, revealed, strikes = game.num_wrong_guesses(), "guess made");

        match game.status(self.max_wrong_guesses) {
            RoundStatus::Won => info!("round won"),
            RoundStatus::Lost => info!("round lost"),
            RoundStatus::InProgress => {}
        }
        Ok(revealed)
    }

    /// # Errors
    /// `NoActiveRound` before a round was started.
    pub fn guess_view(&self) -> Result<&str> {
        Ok(self.active_game()?.guess_view())
    }

    /// # Errors
    /// `NoActiveRound` before a round was started.
    pub fn num_wrong_guesses(&self) -> Result<u32> {
        Ok(self.active_game()?.num_wrong_guesses())
    }

    /// # Errors
    /// `NoActiveRound` before a round was started.
    pub fn letters_guessed(&self) -> Result<FxHashSet<char>> {
        Ok(self.active_game()?.letters_guessed())
    }

    /// Current round status; `InProgress` when no round was started
    #[must_use]
    pub fn round_status(&self) -> RoundStatus {
        self.game
            .as_ref()
            .map_or(RoundStatus::InProgress, |g| g.status(self.max_wrong_guesses))
    }

    /// Whole word revealed while still under the strike limit
    #[must_use]
    pub fn check_win_condition(&self) -> bool {
        self.round_status() == RoundStatus::Won
    }

    /// Strike limit reached
    #[must_use]
    pub fn check_lose_condition(&self) -> bool {
        self.round_status() == RoundStatus::Lost
    }

    /// The secret word, only once the round is over
    #[must_use]
    pub fn secret_word(&self) -> Option<&str> {
        self.game
            .as_ref()
            .filter(|g| g.status(self.max_wrong_guesses).is_over())
            .map(Game::word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    fn racecar_repo() -> MemoryRepository {
        MemoryRepository::with_words(["racecar"])
    }

    #[test]
    fn accessors_fail_before_start() {
        let repo = racecar_repo();
        let mut play = PlayGameUseCase::new(&repo);

        assert!(matches!(play.make_guess('a'), Err(HangmanError::NoActiveRound)));
        assert!(matches!(play.guess_view(), Err(HangmanError::NoActiveRound)));
        assert!(!play.check_win_condition());
        assert!(!play.check_lose_condition());
        assert!(play.secret_word().is_none());
    }

    #[test]
    fn winning_round() {
        let repo = racecar_repo();
        let mut play = PlayGameUseCase::new(&repo);
        play.start_game().unwrap();
        assert_eq!(play.guess_view().unwrap(), "-------");

        for guess in ['a', 'e', 'c'] {
            assert!(play.make_guess(guess).unwrap());
        }
        assert_eq!(play.guess_view().unwrap(), "-aceca-");
        assert!(!play.check_win_condition());
        assert!(play.secret_word().is_none());

        play.make_guess('r').unwrap();
        assert!(play.check_win_condition());
        assert!(!play.check_lose_condition());
        assert_eq!(play.secret_word(), Some("racecar"));
        assert_eq!(play.num_wrong_guesses().unwrap(), 0);
    }

    #[test]
    fn losing_round_at_six_strikes() {
        let repo = racecar_repo();
        let mut play = PlayGameUseCase::new(&repo);
        play.start_game().unwrap();

        for guess in ['b', 'd', 'f', 'g', 'h'] {
            play.make_guess(guess).unwrap();
            assert!(!play.check_lose_condition());
        }
        play.make_guess('i').unwrap();

        assert!(play.check_lose_condition());
        assert!(!play.check_win_condition());
        assert_eq!(play.letters_guessed().unwrap().len(), 6);
        assert_eq!(play.secret_word(), Some("racecar"));
    }

    #[test]
    fn custom_strike_limit() {
        let repo = racecar_repo();
        let mut play = PlayGameUseCase::new(&repo).with_max_wrong_guesses(2);
        assert_eq!(play.max_wrong_guesses(), 2);
        play.start_game().unwrap();

        play.make_guess('z').unwrap();
        assert_eq!(play.round_status(), RoundStatus::InProgress);
        play.make_guess('y').unwrap();
        assert_eq!(play.round_status(), RoundStatus::Lost);
    }

    #[test]
    fn invalid_guess_is_rejected() {
        let repo = racecar_repo();
        let mut play = PlayGameUseCase::new(&repo);
        play.start_game().unwrap();

        assert!(matches!(play.make_guess('&'), Err(HangmanError::InvalidGuess('&'))));
        assert_eq!(play.guess_view().unwrap(), "-------");
        assert!(play.letters_guessed().unwrap().is_empty());
        assert_eq!(play.num_wrong_guesses().unwrap(), 0);
    }

    #[test]
    fn start_game_resets_round() {
        let repo = racecar_repo();
        let mut play = PlayGameUseCase::new(&repo);
        play.start_game().unwrap();
        play.make_guess('z').unwrap();

        play.start_game().unwrap();
        assert_eq!(play.num_wrong_guesses().unwrap(), 0);
        assert!(play.letters_guessed().unwrap().is_empty());
    }

    #[test]
    fn start_game_propagates_repo_errors() {
        let repo = MemoryRepository::new();
        let mut play = PlayGameUseCase::new(&repo);
        assert!(matches!(play.start_game(), Err(HangmanError::Repo { .. })));
        assert!(play.game().is_none());
    }
}

//! TUI application state and logic

use crate::core::RoundStatus;
use crate::error::HangmanError;
use crate::repository::{UserRepository, WordRepository};
use crate::usecases::{AccountUseCase, PlayGameUseCase};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, R: WordRepository + UserRepository + ?Sized> {
    pub play: PlayGameUseCase<'a, R>,
    pub accounts: AccountUseCase<'a, R>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver(RoundStatus),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a, R: WordRepository + UserRepository + ?Sized> App<'a, R> {
    #[must_use]
    pub fn new(repo: &'a R, max_wrong_guesses: u32) -> Self {
        Self {
            play: PlayGameUseCase::new(repo).with_max_wrong_guesses(max_wrong_guesses),
            accounts: AccountUseCase::new(repo),
            input_mode: InputMode::Guessing,
            messages: vec![Message {
                text: "Welcome! Type a letter to guess it.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Sign in so that won rounds are recorded
    ///
    /// # Errors
    /// Returns an error if the user does not exist.
    pub fn sign_in(&mut self, user_name: &str) -> crate::error::Result<()> {
        let user = self.accounts.login(user_name)?;
        self.add_message(
            &format!("Signed in as {} ({} won)", user.user_name(), user.num_success()),
            MessageStyle::Info,
        );
        Ok(())
    }

    /// Start a new round
    ///
    /// # Errors
    /// Returns an error if the word repository cannot supply a valid word.
    pub fn start_round(&mut self) -> crate::error::Result<()> {
        self.play.start_game()?;
        self.input_mode = InputMode::Guessing;
        Ok(())
    }

    pub fn new_game(&mut self) {
        match self.start_round() {
            Ok(()) => self.add_message("New word! Start guessing.", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_guess(&mut self, guess: char) {
        match self.play.make_guess(guess) {
            Ok(true) => {
                self.add_message(&format!("'{guess}' is in the word!"), MessageStyle::Success);
            }
            Ok(false) => {
                self.add_message(&format!("No new '{guess}' in the word."), MessageStyle::Error);
            }
            Err(HangmanError::InvalidGuess(_)) => {
                self.add_message(
                    &format!("'{guess}' is not a letter from a to z"),
                    MessageStyle::Error,
                );
                return;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        let status = self.play.round_status();
        if status.is_over() {
            self.finish_round(status);
        }
    }

    fn finish_round(&mut self, status: RoundStatus) {
        self.input_mode = InputMode::RoundOver(status);
        self.stats.total_games += 1;

        let word = self.play.secret_word().unwrap_or_default().to_uppercase();
        if status == RoundStatus::Won {
            self.stats.games_won += 1;
            self.add_message(&format!("You guessed {word}!"), MessageStyle::Success);

            if self.accounts.current_user().is_some() {
                match self.accounts.record_win() {
                    Ok(user) => self.add_message(
                        &format!("{} now has {} wins", user.user_name(), user.num_success()),
                        MessageStyle::Success,
                    ),
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
        } else {
            self.add_message(&format!("Out of guesses! The word was {word}"), MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Letters guessed so far, alphabetically, with whether each is in the word
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<(char, bool)> {
        self.play.game().map_or_else(Vec::new, |game| {
            game.letters_guessed_sorted()
                .into_iter()
                .map(|c| (c, game.word().contains(c)))
                .collect()
        })
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Esc
            || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver(_) => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => {
                if let KeyCode::Char(c) = code {
                    self.handle_guess(c);
                }
            }
        }
    }
}

/// Run the TUI application
///
/// The caller is expected to have started the first round.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: WordRepository + UserRepository + ?Sized>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, R>(terminal: &mut Terminal<B>, mut app: App<'_, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    R: WordRepository + UserRepository + ?Sized,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    fn started(repo: &MemoryRepository) -> App<'_, MemoryRepository> {
        let mut app = App::new(repo, 6);
        app.start_round().unwrap();
        app
    }

    #[test]
    fn guessing_the_word_wins_and_records() {
        let repo = MemoryRepository::with_words(["racecar"]);
        repo.add_user("alice").unwrap();
        let mut app = started(&repo);
        app.sign_in("alice").unwrap();

        for c in ['r', 'a', 'c', 'e'] {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }

        assert_eq!(app.input_mode, InputMode::RoundOver(RoundStatus::Won));
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(repo.user_info("alice").unwrap().num_success(), 1);
    }

    #[test]
    fn letters_are_ignored_after_round_over() {
        let repo = MemoryRepository::with_words(["racecar"]);
        let mut app = App::new(&repo, 1);
        app.start_round().unwrap();

        app.handle_key(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::RoundOver(RoundStatus::Lost));

        app.handle_key(KeyCode::Char('r'), KeyModifiers::NONE);
        assert_eq!(app.play.guess_view().unwrap(), "-------");
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.win_rate(), 0.0);
    }

    #[test]
    fn new_game_after_round_over() {
        let repo = MemoryRepository::with_words(["racecar"]);
        let mut app = App::new(&repo, 1);
        app.start_round().unwrap();
        app.handle_key(KeyCode::Char('z'), KeyModifiers::NONE);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.play.num_wrong_guesses().unwrap(), 0);
    }

    #[test]
    fn invalid_key_is_reported() {
        let repo = MemoryRepository::with_words(["racecar"]);
        let mut app = started(&repo);

        app.handle_key(KeyCode::Char('7'), KeyModifiers::NONE);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert_eq!(app.play.num_wrong_guesses().unwrap(), 0);
    }

    #[test]
    fn guessed_letters_marks_hits() {
        let repo = MemoryRepository::with_words(["racecar"]);
        let mut app = started(&repo);
        app.handle_guess('z');
        app.handle_guess('a');

        assert_eq!(app.guessed_letters(), vec![('a', true), ('z', false)]);
    }

    #[test]
    fn q_and_n_are_guesses_while_guessing() {
        let repo = MemoryRepository::with_words(["quickly"]);
        let mut app = started(&repo);

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);

        assert!(!app.should_quit);
        assert_eq!(app.play.guess_view().unwrap(), "q------");
        assert_eq!(app.play.num_wrong_guesses().unwrap(), 1);
    }

    #[test]
    fn every_letter_is_a_guess() {
        let repo = MemoryRepository::with_words(["quickly"]);
        let mut app = App::new(&repo, 26);
        app.start_round().unwrap();

        for c in "abdefghjmnoprstvwxzquickly".chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
            assert!(!app.should_quit, "'{c}' should not quit");
        }

        assert_eq!(app.input_mode, InputMode::RoundOver(RoundStatus::Won));
        assert_eq!(app.play.num_wrong_guesses().unwrap(), 19);
    }

    #[test]
    fn q_quits_after_round_over() {
        let repo = MemoryRepository::with_words(["racecar"]);
        let mut app = App::new(&repo, 1);
        app.start_round().unwrap();
        app.handle_key(KeyCode::Char('z'), KeyModifiers::NONE);

        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn escape_quits() {
        let repo = MemoryRepository::with_words(["racecar"]);
        let mut app = started(&repo);
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let repo = MemoryRepository::with_words(["racecar"]);
        let mut app = started(&repo);
        for c in "bdfghij".chars() {
            app.add_message(&c.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "j");
    }
}

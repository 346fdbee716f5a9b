//! Simple interactive CLI mode
//!
//! Line-based hangman on stdin/stdout, without the TUI

use crate::core::{Game, RoundStatus};
use crate::error::HangmanError;
use crate::output::{print_round, print_round_result};
use crate::repository::{UserRepository, WordRepository};
use crate::usecases::{AccountUseCase, PlayGameUseCase};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the line-based game loop
///
/// When `user_name` is given that user is signed in first, and every won round
/// is added to their record. End of input quits.
///
/// # Errors
///
/// Returns an error on I/O failure, if `user_name` does not exist, or if the
/// repository cannot supply a word or save a win.
pub fn run_simple<R>(repo: &R, user_name: Option<&str>, max_wrong_guesses: u32) -> Result<()>
where
    R: WordRepository + UserRepository + ?Sized,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut accounts = AccountUseCase::new(repo);
    if let Some(name) = user_name {
        accounts.login(name)?;
    }
    let mut play = PlayGameUseCase::new(repo).with_max_wrong_guesses(max_wrong_guesses);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Hangman - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if let Some(user) = accounts.current_user() {
        println!("Signed in as {}.", user.user_name().bright_white().bold());
    }
    println!("Guess one lowercase letter per line. {max_wrong_guesses} wrong guesses lose.");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    play.start_game()?;

    loop {
        let Some(game) = play.game() else {
            return Ok(());
        };
        print_round(
            game.guess_view(),
            game.num_wrong_guesses(),
            play.max_wrong_guesses(),
            &game.letters_guessed_sorted(),
        );

        let Some(line) = get_user_input(&mut input, "Your guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match line.as_str() {
            "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                play.start_game()?;
                println!("\n🔄 New word!\n");
                continue;
            }
            _ => {}
        }

        let mut chars = line.chars();
        let (Some(guess), None) = (chars.next(), chars.next()) else {
            println!("{}", "❌ Enter exactly one letter.".red());
            continue;
        };

        match play.make_guess(guess) {
            Ok(true) => println!("{}", format!("✓ '{guess}' is in the word!").green()),
            Ok(false) => println!("{}", format!("✗ No new '{guess}' in the word.").yellow()),
            Err(HangmanError::InvalidGuess(_)) => {
                println!("{}", format!("❌ '{guess}' is not a letter from a to z.").red());
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        let status = play.round_status();
        if !status.is_over() {
            continue;
        }

        let strikes = play.num_wrong_guesses()?;
        print_round(
            play.guess_view()?,
            strikes,
            play.max_wrong_guesses(),
            &play.game().map(Game::letters_guessed_sorted).unwrap_or_default(),
        );
        print_round_result(status, play.secret_word().unwrap_or_default(), strikes);

        if status == RoundStatus::Won && accounts.current_user().is_some() {
            let user = accounts.record_win()?;
            println!(
                "  {} now has {} {}.\n",
                user.user_name().bright_white().bold(),
                user.num_success().to_string().bright_yellow(),
                if user.num_success() == 1 { "win" } else { "wins" }
            );
        }

        match get_user_input(&mut input, "Play again? (yes/no)")?.as_deref() {
            Some("yes" | "y") => {
                play.start_game()?;
                println!("\n🔄 New word!\n");
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn input_is_trimmed() {
        let mut input = Cursor::new("  a \nnext\n");
        assert_eq!(get_user_input(&mut input, "p").unwrap().as_deref(), Some("a"));
        assert_eq!(get_user_input(&mut input, "p").unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn end_of_input_is_none() {
        let mut input = Cursor::new("");
        assert!(get_user_input(&mut input, "p").unwrap().is_none());
    }
}

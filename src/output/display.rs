//! Display functions for command results

use super::formatters::{gallows, letter_list, spaced_view, strike_bar};
use crate::core::{RoundStatus, User};
use colored::Colorize;

/// Which ordering a leaderboard was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    Name,
    Score,
}

/// Print a leaderboard table
pub fn print_leaderboard(users: &[User], ranking: Ranking) {
    let title = match ranking {
        Ranking::Name => "LEADERBOARD (by name)",
        Ranking::Score => "LEADERBOARD (by score)",
    };

    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    if users.is_empty() {
        println!("\n  No players registered yet.\n");
        return;
    }

    println!("\n  {:<4} {:<24} {:>6}", "#", "Player", "Wins");
    for (i, user) in users.iter().enumerate() {
        let name = if user.is_root() {
            format!("{} *", user.user_name())
        } else {
            user.user_name().to_string()
        };
        println!(
            "  {} {} {}",
            format!("{:<4}", i + 1).bright_black(),
            format!("{name:<24}").bright_white(),
            format!("{:>6}", user.num_success()).bright_yellow()
        );
    }
    println!("\n  {}\n", "* root user".bright_black());
}

/// Print a single user record
pub fn print_user(user: &User) {
    println!(
        "{} {} won, {}",
        user.user_name().bright_white().bold(),
        user.num_success().to_string().bright_yellow(),
        if user.is_root() { "root" } else { "regular user" }
    );
}

/// Print the board for the round in progress
pub fn print_round(view: &str, strikes: u32, max_strikes: u32, letters: &[char]) {
    println!("\n{}", gallows(strikes, max_strikes).bright_white());
    println!("\n  Word:     {}", spaced_view(view).bright_yellow().bold());
    println!(
        "  Strikes:  [{}] {strikes}/{max_strikes}",
        strike_bar(strikes, max_strikes).red()
    );
    println!("  Guessed:  {}\n", letter_list(letters));
}

/// Print the end-of-round banner
pub fn print_round_result(status: RoundStatus, word: &str, strikes: u32) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match status {
        RoundStatus::Won => {
            println!("{}", "   🎉  Y O U   W I N !  🎉".bright_green().bold());
            println!(
                "\n  You guessed {} with {} {}.",
                word.to_uppercase().bright_white().bold(),
                strikes.to_string().bright_cyan(),
                if strikes == 1 { "strike" } else { "strikes" }
            );
        }
        RoundStatus::Lost => {
            println!("{}", "   💀  G A M E   O V E R  💀".red().bold());
            println!(
                "\n  The word was {}.",
                word.to_uppercase().bright_white().bold()
            );
        }
        RoundStatus::InProgress => {}
    }
    println!("{}\n", "═".repeat(50).bright_cyan());
}

//! Hangman - CLI
//!
//! Play hangman in a TUI or on plain stdin, manage accounts and view the
//! leaderboard.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use hangman::{
    commands::{leaderboard, register, remove, run_simple, user_info},
    config::{DEFAULT_MAX_WRONG_GUESSES, DEFAULT_USERS_PATH, DEFAULT_WORD_BANK_PATH, GameConfig},
    interactive::{App, run_tui},
    logging::init_tracing,
    output::{Ranking, print_leaderboard, print_user},
    repository::TextFileRepository,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with accounts and a leaderboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank file, one lowercase word (7-21 letters) per line
    #[arg(long, global = true, env = "HANGMAN_WORD_BANK", default_value = DEFAULT_WORD_BANK_PATH)]
    word_bank: PathBuf,

    /// User records file, one `name#wins#Y|N` record per line
    #[arg(long, global = true, env = "HANGMAN_USERS", default_value = DEFAULT_USERS_PATH)]
    users: PathBuf,

    /// Wrong guesses allowed before a round is lost
    #[arg(long = "max-wrong", global = true, default_value_t = DEFAULT_MAX_WRONG_GUESSES)]
    max_wrong_guesses: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Record won rounds for this user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Simple CLI mode (line-based, without TUI)
    Simple {
        /// Record won rounds for this user
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Register a new user; the first user ever registered becomes root
    Register {
        /// Username (letters and digits only)
        name: String,
    },

    /// Show a user's record
    Info {
        /// Username to look up
        name: String,
    },

    /// Remove a user (root only)
    Remove {
        /// Username to remove
        name: String,

        /// Root user performing the removal
        #[arg(long = "as", value_name = "ROOT")]
        acting_user: String,
    },

    /// Show all users ranked by name or score
    Leaderboard {
        /// Ranking order
        #[arg(long, value_enum, default_value_t = RankBy::Score)]
        by: RankBy,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RankBy {
    Name,
    Score,
}

impl From<RankBy> for Ranking {
    fn from(by: RankBy) -> Self {
        match by {
            RankBy::Name => Self::Name,
            RankBy::Score => Self::Score,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.word_bank, cli.users)
        .with_max_wrong_guesses(cli.max_wrong_guesses);
    let repo = TextFileRepository::open(&config.word_bank_path, &config.users_path)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { user: None });

    match command {
        Commands::Play { user } => run_play_command(&repo, user.as_deref(), &config),
        Commands::Simple { user } => run_simple(&repo, user.as_deref(), config.max_wrong_guesses),
        Commands::Register { name } => {
            let user = register(&repo, &name)?;
            println!("{} registered.", user.user_name().bright_green().bold());
            if user.is_root() {
                println!("{} is the first user and has root permissions.", user.user_name());
            }
            Ok(())
        }
        Commands::Info { name } => {
            print_user(&user_info(&repo, &name)?);
            Ok(())
        }
        Commands::Remove { name, acting_user } => {
            remove(&repo, &acting_user, &name)?;
            println!("{} removed.", name.bright_yellow());
            Ok(())
        }
        Commands::Leaderboard { by } => {
            let ranking = Ranking::from(by);
            print_leaderboard(&leaderboard(&repo, ranking)?, ranking);
            Ok(())
        }
    }
}

fn run_play_command(
    repo: &TextFileRepository,
    user: Option<&str>,
    config: &GameConfig,
) -> Result<()> {
    let mut app = App::new(repo, config.max_wrong_guesses);
    if let Some(name) = user {
        app.sign_in(name)?;
    }
    app.start_round()?;
    run_tui(app)
}

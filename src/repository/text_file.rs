//! Flat-file backend
//!
//! Two plain text files back this repository: a word bank with one word per
//! line, and a user records file with one `name#wins#Y|N` record per line.
//! Both are loaded into memory when the repository is opened. Every mutating
//! call rewrites the users file before the in-memory state is committed, so a
//! failed write leaves both the file and the cache as they were.

use super::records::{format_user_record, is_valid_word_entry, parse_user_record, to_file_contents};
use super::{UserListing, UserRepository, UserTable, WordRepository};
use crate::config::{DEFAULT_USERS_PATH, DEFAULT_WORD_BANK_PATH};
use crate::core::User;
use crate::error::{HangmanError, Result};
use rand::seq::IndexedRandom;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Word seeded into a newly created word bank
pub const DEFAULT_WORD: &str = "racecar";

pub struct TextFileRepository {
    word_bank_path: PathBuf,
    users_path: PathBuf,
    word_bank: RefCell<Vec<String>>,
    users: RefCell<UserTable>,
}

impl TextFileRepository {
    /// Open (or create) the word bank and user records files
    ///
    /// A missing word bank is created holding [`DEFAULT_WORD`]; a missing
    /// users file is created empty. Parent directories are created as needed.
    ///
    /// # Errors
    /// `HangmanError::Repo` if a file cannot be created or read, or if any
    /// user record is malformed.
    pub fn open(
        word_bank_path: impl Into<PathBuf>,
        users_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let word_bank_path = word_bank_path.into();
        let users_path = users_path.into();

        let word_bank = if word_bank_path.exists() {
            load_word_bank(&word_bank_path)?
        } else {
            let seeded = vec![DEFAULT_WORD.to_string()];
            write_lines(&word_bank_path, &seeded)?;
            info!(path = %word_bank_path.display(), "created word bank");
            seeded
        };

        let users = if users_path.exists() {
            load_users(&users_path)?
        } else {
            write_lines(&users_path, &[])?;
            info!(path = %users_path.display(), "created user records");
            UserTable::default()
        };

        debug!(
            words = word_bank.len(),
            users = users.len(),
            "opened text file repository"
        );

        Ok(Self {
            word_bank_path,
            users_path,
            word_bank: RefCell::new(word_bank),
            users: RefCell::new(users),
        })
    }

    /// Open the repository at the default file paths
    ///
    /// # Errors
    /// See [`TextFileRepository::open`].
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_WORD_BANK_PATH, DEFAULT_USERS_PATH)
    }

    #[must_use]
    pub fn word_bank_path(&self) -> &Path {
        &self.word_bank_path
    }

    #[must_use]
    pub fn users_path(&self) -> &Path {
        &self.users_path
    }

    /// Rewrite both files from the in-memory records
    ///
    /// # Errors
    /// `HangmanError::Repo` if either file cannot be written.
    pub fn flush(&self) -> Result<()> {
        write_lines(&self.word_bank_path, &self.word_bank.borrow())?;
        self.persist_users(&self.users.borrow())?;
        debug!("flushed text file repository");
        Ok(())
    }

    fn persist_users(&self, table: &UserTable) -> Result<()> {
        let lines: Vec<String> = table.users().iter().map(format_user_record).collect();
        write_lines(&self.users_path, &lines)
    }

    /// Apply `change` to a copy of the user table, persist it, then commit
    fn update_users<T>(&self, change: impl FnOnce(&mut UserTable) -> Result<T>) -> Result<T> {
        let mut staged = self.users.borrow().clone();
        let outcome = change(&mut staged)?;
        self.persist_users(&staged)?;
        *self.users.borrow_mut() = staged;
        Ok(outcome)
    }
}

impl WordRepository for TextFileRepository {
    fn random_word(&self) -> Result<String> {
        let word_bank = self.word_bank.borrow();

        if let Some(bad) = word_bank.iter().find(|w| !is_valid_word_entry(w)) {
            return Err(HangmanError::repo(
                &self.word_bank_path,
                format!("Invalid word found: `{bad}`"),
            ));
        }

        word_bank
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| {
                HangmanError::repo(&self.word_bank_path, "Word bank is unexpectedly empty")
            })
    }
}

impl UserRepository for TextFileRepository {
    fn add_user(&self, user_name: &str) -> Result<User> {
        let user = self.update_users(|table| table.add(user_name))?;
        info!(user = user.user_name(), root = user.is_root(), "added user");
        Ok(user)
    }

    fn remove_user(&self, acting_user: &User, user_name: &str) -> Result<()> {
        self.update_users(|table| table.remove(acting_user, user_name))?;
        info!(user = user_name, by = acting_user.user_name(), "removed user");
        Ok(())
    }

    fn save_user_info(&self, user: &User) -> Result<()> {
        self.update_users(|table| table.save(user))?;
        debug!(user = user.user_name(), wins = user.num_success(), "saved user");
        Ok(())
    }

    fn user_info(&self, user_name: &str) -> Result<User> {
        self.users.borrow().get(user_name).cloned()
    }

    fn login(&self, user_name: &str) -> Result<User> {
        let user = self.user_info(user_name)?;
        debug!(user = user_name, "logged in");
        Ok(user)
    }
}

impl UserListing for TextFileRepository {
    fn all_user_info(&self) -> Result<Vec<User>> {
        Ok(self.users.borrow().users().to_vec())
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| HangmanError::repo_io(path, "Error loading records", e))
}

fn load_word_bank(path: &Path) -> Result<Vec<String>> {
    let contents = read_file(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

fn load_users(path: &Path) -> Result<UserTable> {
    let contents = read_file(path)?;

    let users = contents
        .lines()
        .map(|line| {
            parse_user_record(line).ok_or_else(|| {
                HangmanError::repo(path, format!("Invalid user record found: `{line}`"))
            })
        })
        .collect::<Result<Vec<User>>>()?;

    let table = UserTable::new(users);
    if let Some(problem) = table.integrity_violation() {
        return Err(HangmanError::repo(path, problem));
    }
    Ok(table)
}

/// Replace `path` with `lines` via a temporary sibling file and a rename
fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let save_error = |e: io::Error| HangmanError::repo_io(path, "Error saving records", e);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(save_error)?;
    }

    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let written = fs::write(&tmp_path, to_file_contents(lines))
        .and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(save_error(e));
    }
    Ok(())
}

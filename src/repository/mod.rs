//! Persistence for words and users
//!
//! The use cases depend only on the capability traits below. Two backends
//! implement them: [`TextFileRepository`] over a pair of flat files, and
//! [`MemoryRepository`] for tests and throwaway sessions.
//!
//! All methods take `&self`; backends use interior mutability since the game
//! is single-threaded and several use cases share one repository.

mod memory;
pub mod records;
mod text_file;
mod user_table;

pub use memory::MemoryRepository;
pub use text_file::{DEFAULT_WORD, TextFileRepository};
pub use user_table::UserTable;

use crate::core::User;
use crate::error::Result;

/// Source of words to guess
pub trait WordRepository {
    /// Pick a word uniformly at random from the word bank
    ///
    /// # Errors
    /// `HangmanError::Repo` if the bank is empty or holds a malformed entry.
    fn random_word(&self) -> Result<String>;
}

/// Registered users and their records
pub trait UserRepository {
    /// Register `user_name` with zero wins; the first user ever added is root
    ///
    /// # Errors
    /// `InvalidUserName`, `UserExists`, or `Repo` if persisting fails.
    fn add_user(&self, user_name: &str) -> Result<User>;

    /// Remove `user_name` on behalf of `acting_user`, who must be root
    ///
    /// # Errors
    /// `NotPermitted`, `UserNotFound`, `FirstUser`, or `Repo`.
    fn remove_user(&self, acting_user: &User, user_name: &str) -> Result<()>;

    /// Replace the stored record for `user`; root status cannot change
    ///
    /// # Errors
    /// `UserNotFound`, `NotPermitted`, or `Repo`.
    fn save_user_info(&self, user: &User) -> Result<()>;

    /// Copy of the stored record for `user_name`
    ///
    /// # Errors
    /// `UserNotFound`.
    fn user_info(&self, user_name: &str) -> Result<User>;

    /// Authenticate by name only and return the stored record
    ///
    /// # Errors
    /// `UserNotFound`.
    fn login(&self, user_name: &str) -> Result<User>;
}

/// Read access to every user, for leaderboards
pub trait UserListing {
    /// All users in registration order
    ///
    /// # Errors
    /// `Repo` if the backend cannot produce its records.
    fn all_user_info(&self) -> Result<Vec<User>>;
}

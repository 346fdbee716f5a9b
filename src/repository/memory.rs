//! In-memory backend sharing the user store rules of the flat-file one

use super::{UserListing, UserRepository, UserTable, WordRepository};
use crate::core::User;
use crate::error::{HangmanError, Result};
use crate::repository::records::is_valid_word_entry;
use rand::seq::IndexedRandom;
use std::cell::RefCell;

const MEMORY_PATH: &str = "memory://word_bank";

/// In-memory backend with the same user rules as the file backend.
///
/// Uses `RefCell` for interior mutability since the game is single-threaded,
/// which lets the repository traits take `&self` everywhere.
#[derive(Default)]
pub struct MemoryRepository {
    word_bank: Vec<String>,
    users: RefCell<UserTable>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose word bank holds `words`, with no users
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            word_bank: words.into_iter().map(Into::into).collect(),
            users: RefCell::default(),
        }
    }
}

impl WordRepository for MemoryRepository {
    fn random_word(&self) -> Result<String> {
        if let Some(bad) = self.word_bank.iter().find(|w| !is_valid_word_entry(w)) {
            return Err(HangmanError::repo(
                MEMORY_PATH,
                format!("Invalid word found: `{bad}`"),
            ));
        }

        self.word_bank
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| HangmanError::repo(MEMORY_PATH, "Word bank is unexpectedly empty"))
    }
}

impl UserRepository for MemoryRepository {
    fn add_user(&self, user_name: &str) -> Result<User> {
        self.users.borrow_mut().add(user_name)
    }

    fn remove_user(&self, acting_user: &User, user_name: &str) -> Result<()> {
        self.users.borrow_mut().remove(acting_user, user_name)?;
        Ok(())
    }

    fn save_user_info(&self, user: &User) -> Result<()> {
        self.users.borrow_mut().save(user)
    }

    fn user_info(&self, user_name: &str) -> Result<User> {
        self.users.borrow().get(user_name).cloned()
    }

    fn login(&self, user_name: &str) -> Result<User> {
        self.user_info(user_name)
    }
}

impl UserListing for MemoryRepository {
    fn all_user_info(&self) -> Result<Vec<User>> {
        Ok(self.users.borrow().users().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_word_from_single_entry() {
        let repo = MemoryRepository::with_words(["racecar"]);
        assert_eq!(repo.random_word().unwrap(), "racecar");
    }

    #[test]
    fn random_word_rejects_empty_and_malformed_banks() {
        assert!(matches!(
            MemoryRepository::new().random_word(),
            Err(HangmanError::Repo { .. })
        ));
        assert!(matches!(
            MemoryRepository::with_words(["racecar", "Nope"]).random_word(),
            Err(HangmanError::Repo { .. })
        ));
    }

    #[test]
    fn user_lifecycle() {
        let repo = MemoryRepository::new();
        let root = repo.add_user("alice").unwrap();
        let mut bob = repo.add_user("bob").unwrap();
        assert!(root.is_root());
        assert!(!bob.is_root());

        bob.record_success();
        repo.save_user_info(&bob).unwrap();
        assert_eq!(repo.login("bob").unwrap().num_success(), 1);

        repo.remove_user(&root, "bob").unwrap();
        assert_eq!(repo.all_user_info().unwrap(), vec![root]);
    }
}

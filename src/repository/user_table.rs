//! User store rules shared by every backend
//!
//! `UserTable` holds the ordered list of users and enforces name uniqueness,
//! first-user root status and the root-only removal rule. Backends decide how
//! the table is persisted.

use crate::core::{User, is_valid_user_name};
use crate::error::{HangmanError, Result};
use rustc_hash::FxHashSet;

const REMOVE_USER: &str = "remove user";
const SAVE_USER_INFO: &str = "change root status";
const ROOT_PERMISSION: &str = "root";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTable {
    users: Vec<User>,
}

impl UserTable {
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Describe the first store-level rule the records break, if any
    ///
    /// A loaded store must have unique names and exactly one root, which is
    /// the first record.
    #[must_use]
    pub fn integrity_violation(&self) -> Option<String> {
        let mut seen = FxHashSet::default();
        for (i, user) in self.users.iter().enumerate() {
            if !seen.insert(user.user_name()) {
                return Some(format!("Duplicate user record found: `{}`", user.user_name()));
            }
            if user.is_root() != (i == 0) {
                let problem = if i == 0 {
                    "First user is not root"
                } else {
                    "Extra root user found"
                };
                return Some(format!("{problem}: `{}`", user.user_name()));
            }
        }
        None
    }

    fn position(&self, user_name: &str) -> Option<usize> {
        self.users.iter().position(|u| u.user_name() == user_name)
    }

    /// Look up a user by exact name
    ///
    /// # Errors
    /// `HangmanError::UserNotFound` if no user has that name.
    pub fn get(&self, user_name: &str) -> Result<&User> {
        self.position(user_name)
            .map(|i| &self.users[i])
            .ok_or_else(|| HangmanError::UserNotFound(user_name.to_string()))
    }

    /// Register a new user with no wins
    ///
    /// The user is root iff the table was empty before the insertion.
    ///
    /// # Errors
    /// `InvalidUserName` for names outside `[a-zA-Z0-9]+`, `UserExists` if the
    /// name is taken.
    pub fn add(&mut self, user_name: &str) -> Result<User> {
        if !is_valid_user_name(user_name) {
            return Err(HangmanError::InvalidUserName(user_name.to_string()));
        }
        if self.position(user_name).is_some() {
            return Err(HangmanError::UserExists(user_name.to_string()));
        }

        let user = User::new(user_name, 0, self.users.is_empty());
        self.users.push(user.clone());
        Ok(user)
    }

    /// Remove `user_name` on behalf of `acting_user`
    ///
    /// Permission is judged from the actor's stored record, not from the flag
    /// carried by `acting_user`.
    ///
    /// # Errors
    /// `NotPermitted` unless the actor is a stored root user, `UserNotFound` if
    /// the target does not exist, `FirstUser` if the target is root.
    pub fn remove(&mut self, acting_user: &User, user_name: &str) -> Result<User> {
        let actor_is_root = self
            .position(acting_user.user_name())
            .is_some_and(|i| self.users[i].is_root());
        if !actor_is_root {
            return Err(HangmanError::not_permitted(REMOVE_USER, ROOT_PERMISSION));
        }

        let index = self
            .position(user_name)
            .ok_or_else(|| HangmanError::UserNotFound(user_name.to_string()))?;
        if self.users[index].is_root() {
            return Err(HangmanError::FirstUser(user_name.to_string()));
        }

        Ok(self.users.remove(index))
    }

    /// Replace the stored record for `user.user_name()`
    ///
    /// # Errors
    /// `UserNotFound` if the user does not exist, `NotPermitted` if the update
    /// would change the stored root flag.
    pub fn save(&mut self, user: &User) -> Result<()> {
        let index = self
            .position(user.user_name())
            .ok_or_else(|| HangmanError::UserNotFound(user.user_name().to_string()))?;
        if self.users[index].is_root() != user.is_root() {
            return Err(HangmanError::not_permitted(SAVE_USER_INFO, ROOT_PERMISSION));
        }

        self.users[index] = user.clone();
        Ok(())
    }
}

//! Account registration, login and removal

use crate::core::User;
use crate::error::{HangmanError, Result};
use crate::repository::UserRepository;
use tracing::info;

/// Account operations on behalf of one CLI session
///
/// The signed-in user lives here rather than in the repository; it is passed
/// explicitly to the repository for permission checks.
pub struct AccountUseCase<'a, R: UserRepository + ?Sized> {
    users: &'a R,
    current_user: Option<User>,
}

impl<'a, R: UserRepository + ?Sized> AccountUseCase<'a, R> {
    pub const fn new(users: &'a R) -> Self {
        Self {
            users,
            current_user: None,
        }
    }

    /// Register a new account
    ///
    /// # Errors
    /// `InvalidUserName`, `UserExists` or `Repo`.
    pub fn create_account(&self, user_name: &str) -> Result<User> {
        self.users.add_user(user_name)
    }

    /// Sign in as `user_name` and return the stored record
    ///
    /// # Errors
    /// `UserNotFound` if the account does not exist; the previous session is
    /// kept in that case.
    pub fn login(&mut self, user_name: &str) -> Result<User> {
        let user = self.users.login(user_name)?;
        self.current_user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Remove another account; only the root user may do this
    ///
    /// # Errors
    /// `NotPermitted` when nobody is signed in or the signed-in user is not
    /// root, then `UserNotFound`, `FirstUser` or `Repo` from the repository.
    pub fn remove_account(&self, user_name: &str) -> Result<()> {
        let acting_user = self
            .current_user
            .as_ref()
            .ok_or_else(|| HangmanError::not_permitted("remove user", "root"))?;
        self.users.remove_user(acting_user, user_name)
    }

    /// Count a won round for the signed-in user
    ///
    /// Re-reads the stored record first so wins recorded elsewhere are kept.
    ///
    /// # Errors
    /// `NotPermitted` when nobody is signed in, `UserNotFound` if the account
    /// was removed meanwhile, or `Repo`.
    pub fn record_win(&mut self) -> Result<User> {
        let user_name = self
            .current_user
            .as_ref()
            .map(|u| u.user_name().to_string())
            .ok_or_else(|| HangmanError::not_permitted("record win", "signed-in user"))?;

        let mut user = self.users.user_info(&user_name)?;
        user.record_success();
        self.users.save_user_info(&user)?;

        info!(user = user.user_name(), wins = user.num_success(), "recorded win");
        self.current_user = Some(user.clone());
        Ok(user)
    }
}

//! Account commands: register, info, remove

use crate::core::User;
use crate::error::Result;
use crate::repository::UserRepository;
use crate::usecases::AccountUseCase;

/// Register `user_name` and return the new record
///
/// # Errors
///
/// Returns an error if the name is invalid or taken, or the store cannot be
/// written.
pub fn register<R: UserRepository + ?Sized>(repo: &R, user_name: &str) -> Result<User> {
    AccountUseCase::new(repo).create_account(user_name)
}

/// Look up a user record
///
/// # Errors
///
/// Returns an error if the user does not exist.
pub fn user_info<R: UserRepository + ?Sized>(repo: &R, user_name: &str) -> Result<User> {
    repo.user_info(user_name)
}

/// Sign in as `acting_user` and remove `user_name`
///
/// # Errors
///
/// Returns an error if either user is unknown, the actor is not root, the
/// target is the root user, or the store cannot be written.
pub fn remove<R: UserRepository + ?Sized>(
    repo: &R,
    acting_user: &str,
    user_name: &str,
) -> Result<()> {
    let mut accounts = AccountUseCase::new(repo);
    accounts.login(acting_user)?;
    accounts.remove_account(user_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HangmanError;
    use crate::repository::MemoryRepository;

    #[test]
    fn register_and_look_up() {
        let repo = MemoryRepository::new();
        let alice = register(&repo, "alice").unwrap();
        assert_eq!(user_info(&repo, "alice").unwrap(), alice);
    }

    #[test]
    fn remove_as_unknown_actor() {
        let repo = MemoryRepository::new();
        register(&repo, "alice").unwrap();
        register(&repo, "bob").unwrap();

        assert!(matches!(
            remove(&repo, "mallory", "bob"),
            Err(HangmanError::UserNotFound(name)) if name == "mallory"
        ));
        assert!(remove(&repo, "alice", "bob").is_ok());
    }
}

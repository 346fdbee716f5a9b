//! Registered player record

use std::fmt;

/// A registered player
///
/// Only the first user ever registered in a store is root. Root status is set
/// at registration and cannot be changed through the repositories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    user_name: String,
    num_success: u32,
    is_root: bool,
}

/// Check whether `user_name` is a non-empty run of ASCII letters and digits
#[must_use]
pub fn is_valid_user_name(user_name: &str) -> bool {
    !user_name.is_empty() && user_name.chars().all(|c| c.is_ascii_alphanumeric())
}

impl User {
    #[must_use]
    pub fn new(user_name: impl Into<String>, num_success: u32, is_root: bool) -> Self {
        Self {
            user_name: user_name.into(),
            num_success,
            is_root,
        }
    }

    #[inline]
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Number of words this user has guessed successfully
    #[inline]
    #[must_use]
    pub const fn num_success(&self) -> u32 {
        self.num_success
    }

    #[inline]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }

    /// Record another successfully guessed word
    pub fn record_success(&mut self) {
        self.num_success = self.num_success.saturating_add(1);
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} won", self.user_name, self.num_success)?;
        if self.is_root {
            write!(f, ", root")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_user_names() {
        assert!(is_valid_user_name("alice"));
        assert!(is_valid_user_name("Bob42"));
        assert!(is_valid_user_name("7"));
    }

    #[test]
    fn invalid_user_names() {
        assert!(!is_valid_user_name(""));
        assert!(!is_valid_user_name("al ice"));
        assert!(!is_valid_user_name("alice#"));
        assert!(!is_valid_user_name("zoë"));
        assert!(!is_valid_user_name("under_score"));
    }

    #[test]
    fn record_success_increments() {
        let mut user = User::new("alice", 2, false);
        user.record_success();
        assert_eq!(user.num_success(), 3);
        assert!(!user.is_root());
    }

    #[test]
    fn display_marks_root() {
        assert_eq!(User::new("alice", 1, true).to_string(), "alice (1 won, root)");
        assert_eq!(User::new("bob", 0, false).to_string(), "bob (0 won)");
    }
}

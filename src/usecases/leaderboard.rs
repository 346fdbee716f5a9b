//! Leaderboard rankings over all registered users

use crate::core::User;
use crate::error::Result;
use crate::repository::UserListing;

/// Ranked views over every registered user
pub struct LeaderboardUseCase<'a, L: UserListing + ?Sized> {
    listing: &'a L,
}

impl<'a, L: UserListing + ?Sized> LeaderboardUseCase<'a, L> {
    pub const fn new(listing: &'a L) -> Self {
        Self { listing }
    }

    /// All users sorted by name, ascending
    ///
    /// # Errors
    /// `Repo` if the users cannot be listed.
    pub fn ranked_by_name(&self) -> Result<Vec<User>> {
        let mut users = self.listing.all_user_info()?;
        users.sort_by(|a, b| a.user_name().cmp(b.user_name()));
        Ok(users)
    }

    /// All users sorted by success count, ascending; ties keep registration order
    ///
    /// # Errors
    /// `Repo` if the users cannot be listed.
    pub fn ranked_by_score(&self) -> Result<Vec<User>> {
        let mut users = self.listing.all_user_info()?;
        users.sort_by_key(User::num_success);
        Ok(users)
    }
}

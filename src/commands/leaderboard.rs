//! Leaderboard command

use crate::core::User;
use crate::error::Result;
use crate::output::Ranking;
use crate::repository::UserListing;
use crate::usecases::LeaderboardUseCase;

/// Rank every user by `ranking`
///
/// # Errors
///
/// Returns an error if the users cannot be listed.
pub fn leaderboard<L: UserListing + ?Sized>(repo: &L, ranking: Ranking) -> Result<Vec<User>> {
    let board = LeaderboardUseCase::new(repo);
    match ranking {
        Ranking::Name => board.ranked_by_name(),
        Ranking::Score => board.ranked_by_score(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryRepository, UserRepository};

    #[test]
    fn dispatches_on_ranking() {
        let repo = MemoryRepository::new();
        repo.add_user("zed").unwrap();
        let mut amy = repo.add_user("amy").unwrap();
        amy.record_success();
        repo.save_user_info(&amy).unwrap();

        let by_name = leaderboard(&repo, Ranking::Name).unwrap();
        assert_eq!(by_name[0].user_name(), "amy");

        let by_score = leaderboard(&repo, Ranking::Score).unwrap();
        assert_eq!(by_score[0].user_name(), "zed");
    }
}

//! PostgreSQL implementation of VoteRepository
//!
//! Votes live in one table with two nullable target columns; the
//! `UNIQUE (user_id, post_id)` / `UNIQUE (user_id, comment_id)` constraints
//! make one-record-per-voter-per-target a database guarantee, not just a
//! service-layer convention.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Vote, VoteTarget, VoteValue};
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, VoteRepository};
use forum_core::value_objects::Snowflake;

use crate::models::VoteModel;

use super::error::{map_db_error, map_unique_violation};

const VOTE_COLUMNS: &str = "user_id, post_id, comment_id, value, created_at";

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Split a target into its `(post_id, comment_id)` column values
fn target_columns(target: VoteTarget) -> (Option<i64>, Option<i64>) {
    match target {
        VoteTarget::Post(id) => (Some(id.into_inner()), None),
        VoteTarget::Comment(id) => (None, Some(id.into_inner())),
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, voter_id: Snowflake, target: VoteTarget) -> RepoResult<Option<Vote>> {
        let (post_id, comment_id) = target_columns(target);

        let result = sqlx::query_as::<_, VoteModel>(&format!(
            "SELECT {VOTE_COLUMNS} FROM votes
             WHERE user_id = $1
               AND post_id IS NOT DISTINCT FROM $2
               AND comment_id IS NOT DISTINCT FROM $3"
        ))
        .bind(voter_id.into_inner())
        .bind(post_id)
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_for_target(&self, target: VoteTarget) -> RepoResult<Vec<Vote>> {
        let (post_id, comment_id) = target_columns(target);

        let results = sqlx::query_as::<_, VoteModel>(&format!(
            "SELECT {VOTE_COLUMNS} FROM votes
             WHERE post_id IS NOT DISTINCT FROM $1
               AND comment_id IS NOT DISTINCT FROM $2
             ORDER BY created_at"
        ))
        .bind(post_id)
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Vote::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, vote: &Vote) -> RepoResult<()> {
        let (post_id, comment_id) = target_columns(vote.target);
        let voter_id = vote.voter_id;

        sqlx::query(
            r"
            INSERT INTO votes (user_id, post_id, comment_id, value, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(voter_id.into_inner())
        .bind(post_id)
        .bind(comment_id)
        .bind(vote.value.as_i16())
        .bind(vote.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::VoteConflict(voter_id)))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_value(
        &self,
        voter_id: Snowflake,
        target: VoteTarget,
        value: VoteValue,
    ) -> RepoResult<()> {
        let (post_id, comment_id) = target_columns(target);

        let result = sqlx::query(
            r"
            UPDATE votes
            SET value = $4
            WHERE user_id = $1
              AND post_id IS NOT DISTINCT FROM $2
              AND comment_id IS NOT DISTINCT FROM $3
            ",
        )
        .bind(voter_id.into_inner())
        .bind(post_id)
        .bind(comment_id)
        .bind(value.as_i16())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::VoteNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, voter_id: Snowflake, target: VoteTarget) -> RepoResult<()> {
        let (post_id, comment_id) = target_columns(target);

        let result = sqlx::query(
            r"
            DELETE FROM votes
            WHERE user_id = $1
              AND post_id IS NOT DISTINCT FROM $2
              AND comment_id IS NOT DISTINCT FROM $3
            ",
        )
        .bind(voter_id.into_inner())
        .bind(post_id)
        .bind(comment_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::VoteNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgVoteRepository>();
    }

    #[test]
    fn test_target_columns() {
        assert_eq!(
            target_columns(VoteTarget::Post(Snowflake::new(1))),
            (Some(1), None)
        );
        assert_eq!(
            target_columns(VoteTarget::Comment(Snowflake::new(2))),
            (None, Some(2))
        );
    }
}

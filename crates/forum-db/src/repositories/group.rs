//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::Group;
use forum_core::error::DomainError;
use forum_core::traits::{GroupRepository, GroupWithPostCount, RepoResult};

use crate::mappers::group_with_post_count;
use crate::models::{GroupModel, GroupWithPostCountModel};

use super::error::{group_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GroupRepository
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Group>> {
        let result = sqlx::query_as::<_, GroupModel>(
            r"
            SELECT id, name, title, description, username, created_at, updated_at
            FROM groups
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Group::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM groups WHERE name = $1)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, group: &Group) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO groups (id, name, title, description, username, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(group.id.into_inner())
        .bind(&group.name)
        .bind(&group.title)
        .bind(&group.description)
        .bind(&group.username)
        .bind(group.created_at)
        .bind(group.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::GroupNameExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM groups WHERE name = $1
            ",
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(group_not_found(name));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn top_by_post_count(&self, limit: i64) -> RepoResult<Vec<GroupWithPostCount>> {
        let limit = limit.clamp(1, 25);

        let results = sqlx::query_as::<_, GroupWithPostCountModel>(
            r"
            SELECT g.id, g.name, g.title, g.description, g.username,
                   g.created_at, g.updated_at,
                   COUNT(p.id) AS post_count
            FROM groups g
            LEFT JOIN posts p ON p.group_name = g.name
            GROUP BY g.id, g.name, g.title, g.description, g.username,
                     g.created_at, g.updated_at
            ORDER BY post_count DESC, g.created_at
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(group_with_post_count).collect())
    }
}

//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
///
/// Exactly one of `post_id` / `comment_id` is set; the table enforces this
/// with a CHECK constraint, the mapper re-checks it when loading.
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub user_id: i64,
    pub post_id: Option<i64>,
    pub comment_id: Option<i64>,
    pub value: i16,
    pub created_at: DateTime<Utc>,
}

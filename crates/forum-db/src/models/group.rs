//! Group database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for groups table
#[derive(Debug, Clone, FromRow)]
pub struct GroupModel {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Group joined with its post count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct GroupWithPostCountModel {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub post_count: i64,
}

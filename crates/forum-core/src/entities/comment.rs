//! Comment entity - a reply attached to a post

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

use super::post::random_identifier;

/// Comment on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub identifier: String,
    pub body: String,
    pub post_id: Snowflake,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment, assigning a fresh identifier
    pub fn new(id: Snowflake, body: String, post_id: Snowflake, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            identifier: generate_comment_identifier(),
            body,
            post_id,
            username,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user authored this comment
    #[inline]
    pub fn is_author(&self, username: &str) -> bool {
        self.username == username
    }
}

/// Comment identifier length
const COMMENT_IDENTIFIER_LEN: usize = 8;

/// Generate a random alphanumeric comment identifier
pub fn generate_comment_identifier() -> String {
    random_identifier(COMMENT_IDENTIFIER_LEN)
}

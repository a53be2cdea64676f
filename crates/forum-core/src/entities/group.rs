//! Group entity - a named community that posts are published into

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Community group
///
/// `name` is the unique URL-facing handle; `title` is the display name.
/// The creating user is recorded as owner via `username`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Snowflake,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a new Group owned by `username`
    pub fn new(id: Snowflake, name: String, title: String, username: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            title,
            description: None,
            username,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Check if a user owns this group
    #[inline]
    pub fn is_owner(&self, username: &str) -> bool {
        self.username == username
    }
}

//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, Group, Post, User, Vote, VoteTarget, VoteValue};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Group Repository
// ============================================================================

/// A group joined with its post count, for ranked listings
#[derive(Debug, Clone)]
pub struct GroupWithPostCount {
    pub group: Group,
    pub post_count: i64,
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Find group by its unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Group>>;

    /// Check if a group name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a new group
    async fn create(&self, group: &Group) -> RepoResult<()>;

    /// Delete a group
    async fn delete(&self, name: &str) -> RepoResult<()>;

    /// Groups ranked by post count, most active first
    async fn top_by_post_count(&self, limit: i64) -> RepoResult<Vec<GroupWithPostCount>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Find post by its public handle
    async fn find_by_handle(&self, identifier: &str, slug: &str) -> RepoResult<Option<Post>>;

    /// Find post by identifier alone
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Post>>;

    /// Newest posts first, offset paginated
    async fn find_recent(&self, offset: i64, limit: i64) -> RepoResult<Vec<Post>>;

    /// All posts in a group, newest first
    async fn find_by_group(&self, group_name: &str) -> RepoResult<Vec<Post>>;

    /// All posts by an author, newest first
    async fn find_by_author(&self, username: &str) -> RepoResult<Vec<Post>>;

    /// Posts whose title contains the search term, newest first
    async fn search_by_title(&self, term: &str) -> RepoResult<Vec<Post>>;

    /// Number of comments on a post
    async fn comment_count(&self, post_id: Snowflake) -> RepoResult<i64>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by its public identifier
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Comment>>;

    /// All comments on a post, newest first
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// All comments by an author, newest first
    async fn find_by_author(&self, username: &str) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find a voter's record for a target, if any
    async fn find(&self, voter_id: Snowflake, target: VoteTarget) -> RepoResult<Option<Vote>>;

    /// All votes on a target
    async fn find_for_target(&self, target: VoteTarget) -> RepoResult<Vec<Vote>>;

    /// Insert a new vote record
    ///
    /// A `(voter, target)` uniqueness violation surfaces as
    /// `DomainError::VoteConflict`, never as a duplicate row.
    async fn create(&self, vote: &Vote) -> RepoResult<()>;

    /// Change the direction of an existing record
    async fn update_value(
        &self,
        voter_id: Snowflake,
        target: VoteTarget,
        value: VoteValue,
    ) -> RepoResult<()>;

    /// Remove a vote record
    async fn delete(&self, voter_id: Snowflake, target: VoteTarget) -> RepoResult<()>;
}

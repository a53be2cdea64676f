//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Group Requests
// ============================================================================

/// Create group request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 2, max = 32, message = "Group name must be 2-32 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    #[validate(length(max = 10000, message = "Body must be at most 10000 characters"))]
    pub body: Option<String>,

    #[validate(length(min = 2, max = 32, message = "Group name must be 2-32 characters"))]
    pub group_name: String,
}

/// Title search request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchPostsRequest {
    #[validate(length(min = 1, max = 300, message = "Query must be 1-300 characters"))]
    pub query: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 10000, message = "Body must be 1-10000 characters"))]
    pub body: String,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Cast, flip, or retract a vote on a post or one of its comments
///
/// `value` is -1 or 1 to record a direction, 0 to retract an existing
/// record. When `comment_identifier` is present the vote targets that
/// comment, which must belong to the addressed post. Range checking
/// happens in the service so that an out-of-range value is rejected
/// before any lookup.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CastVoteRequest {
    #[validate(length(min = 1, max = 16, message = "Identifier must be 1-16 characters"))]
    pub identifier: String,

    #[validate(length(min = 1, max = 300, message = "Slug must be 1-300 characters"))]
    pub slug: String,

    pub comment_identifier: Option<String>,

    pub value: i16,
}

//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.
//!
//! Vote annotation on posts and comments is read-only: `like_score` and
//! `user_vote` are computed from stored vote records at response time and
//! are never accepted back from clients.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Public user response (for viewing other users)
#[derive(Debug, Clone, Serialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// A user profile with their posts and comments merged, newest first
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub user: PublicUserResponse,
    pub content: Vec<UserContentResponse>,
}

/// One entry in a user's merged content feed
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UserContentResponse {
    Post(PostResponse),
    Comment(CommentResponse),
}

impl UserContentResponse {
    /// Creation timestamp, used for merge ordering
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Post(p) => p.created_at,
            Self::Comment(c) => c.created_at,
        }
    }
}

// ============================================================================
// Group Responses
// ============================================================================

/// Basic group response
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Group with its annotated posts
#[derive(Debug, Serialize)]
pub struct GroupDetailResponse {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub posts: Vec<PostResponse>,
}

/// Group ranked by activity
#[derive(Debug, Serialize)]
pub struct TopGroupResponse {
    pub name: String,
    pub title: String,
    pub post_count: i64,
}

// ============================================================================
// Post Responses
// ============================================================================

/// Annotated post response
///
/// `user_vote` is present only for authenticated viewers: their recorded
/// direction, or 0 when they have no record on this post. It is omitted
/// entirely for anonymous requests.
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub identifier: String,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub group_name: String,
    pub username: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment_count: i64,
    pub like_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<i16>,
}

/// Post with its annotated comments
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub identifier: String,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub group_name: String,
    pub username: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment_count: i64,
    pub like_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<i16>,
    pub comments: Vec<CommentResponse>,
}

impl PostDetailResponse {
    /// Attach annotated comments to an annotated post
    pub fn from_post(post: PostResponse, comments: Vec<CommentResponse>) -> Self {
        Self {
            identifier: post.identifier,
            title: post.title,
            slug: post.slug,
            body: post.body,
            group_name: post.group_name,
            username: post.username,
            url: post.url,
            created_at: post.created_at,
            updated_at: post.updated_at,
            comment_count: post.comment_count,
            like_score: post.like_score,
            user_vote: post.user_vote,
            comments,
        }
    }
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Annotated comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub identifier: String,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub like_score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<i16>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Readiness response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

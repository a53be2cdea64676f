//! Test fixtures and request/response types
//!
//! Request types mirror the API's expected JSON bodies; response types
//! deserialize the fields the tests assert on.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counter for unique usernames, emails, and group names
static UNIQUE_SUFFIX: AtomicU64 = AtomicU64::new(1);

fn unique_suffix() -> u64 {
    UNIQUE_SUFFIX.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Request fixtures
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Create a registration request with unique username and email
    pub fn unique() -> Self {
        let n = unique_suffix();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        Self {
            username: format!("testuser{n}x{nanos}"),
            email: format!("test{n}x{nanos}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(register: &RegisterRequest) -> Self {
        Self {
            email: register.email.clone(),
            password: register.password.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateGroupRequest {
    /// Create a group request with a unique name
    pub fn unique() -> Self {
        let n = unique_suffix();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        Self {
            name: format!("grp{n}x{nanos}"),
            title: format!("Test Group {n}"),
            description: Some("A group created by integration tests".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub group_name: String,
}

impl CreatePostRequest {
    pub fn new(group_name: &str, title: &str) -> Self {
        Self {
            title: title.to_string(),
            body: Some("Post body written by the integration suite".to_string()),
            group_name: group_name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCommentRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct CastVoteRequest {
    pub identifier: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_identifier: Option<String>,
    pub value: i16,
}

impl CastVoteRequest {
    pub fn for_post(identifier: &str, slug: &str, value: i16) -> Self {
        Self {
            identifier: identifier.to_string(),
            slug: slug.to_string(),
            comment_identifier: None,
            value,
        }
    }

    pub fn for_comment(identifier: &str, slug: &str, comment_identifier: &str, value: i16) -> Self {
        Self {
            identifier: identifier.to_string(),
            slug: slug.to_string(),
            comment_identifier: Some(comment_identifier.to_string()),
            value,
        }
    }
}

// ============================================================================
// Response fixtures
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupResponse {
    pub name: String,
    pub title: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct TopGroupResponse {
    pub name: String,
    pub title: String,
    pub post_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub identifier: String,
    pub title: String,
    pub slug: String,
    pub group_name: String,
    pub username: String,
    pub comment_count: i64,
    pub like_score: i64,
    pub user_vote: Option<i16>,
}

#[derive(Debug, Deserialize)]
pub struct PostDetailResponse {
    pub identifier: String,
    pub title: String,
    pub slug: String,
    pub group_name: String,
    pub username: String,
    pub comment_count: i64,
    pub like_score: i64,
    pub user_vote: Option<i16>,
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub identifier: String,
    pub body: String,
    pub username: String,
    pub like_score: i64,
    pub user_vote: Option<i16>,
}

#[derive(Debug, Deserialize)]
pub struct UserProfileResponse {
    pub user: PublicUserResponse,
    pub content: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct PublicUserResponse {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CastVoteRequest, CreateCommentRequest, CreateGroupRequest, CreatePostRequest, LoginRequest,
    RefreshTokenRequest, RegisterRequest, SearchPostsRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CommentResponse, CurrentUserResponse, GroupDetailResponse, GroupResponse,
    HealthResponse, PostDetailResponse, PostResponse, PublicUserResponse, ReadinessResponse,
    TopGroupResponse, UserContentResponse, UserProfileResponse,
};

// Re-export mapper helper structs
pub use mappers::{CommentWithVotes, PostWithMeta};

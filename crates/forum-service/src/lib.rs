//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use dto::{
    AuthResponse, CastVoteRequest, CommentResponse, CreateCommentRequest, CreateGroupRequest,
    CreatePostRequest, CurrentUserResponse, GroupDetailResponse, GroupResponse, HealthResponse,
    LoginRequest, PostDetailResponse, PostResponse, PublicUserResponse, ReadinessResponse,
    RefreshTokenRequest, RegisterRequest, SearchPostsRequest, TopGroupResponse,
    UserProfileResponse,
};
pub use services::{
    AuthService, CommentService, GroupService, PostService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService, VoteService,
};

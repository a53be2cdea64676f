//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Vote annotation goes through `PostWithMeta` and `CommentWithVotes`,
//! which pair an entity with its loaded vote records and the optional
//! viewer so that `like_score` and `user_vote` are derived in one place.

use forum_core::entities::{tally, viewer_vote, Comment, Group, Post, User, Vote};
use forum_core::traits::GroupWithPostCount;
use forum_core::Snowflake;

use super::responses::{
    CommentResponse, CurrentUserResponse, GroupResponse, PostResponse, PublicUserResponse,
    TopGroupResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for PublicUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Group Mappers
// ============================================================================

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name.clone(),
            title: group.title.clone(),
            description: group.description.clone(),
            username: group.username.clone(),
            created_at: group.created_at,
        }
    }
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self::from(&group)
    }
}

impl From<&GroupWithPostCount> for TopGroupResponse {
    fn from(ranked: &GroupWithPostCount) -> Self {
        Self {
            name: ranked.group.name.clone(),
            title: ranked.group.title.clone(),
            post_count: ranked.post_count,
        }
    }
}

impl From<GroupWithPostCount> for TopGroupResponse {
    fn from(ranked: GroupWithPostCount) -> Self {
        Self::from(&ranked)
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

/// Helper struct for building an annotated `PostResponse`
///
/// `viewer` is the authenticated user, if any. Anonymous viewers get no
/// `user_vote` field at all.
#[derive(Debug)]
pub struct PostWithMeta {
    pub post: Post,
    pub comment_count: i64,
    pub votes: Vec<Vote>,
    pub viewer: Option<Snowflake>,
}

impl From<PostWithMeta> for PostResponse {
    fn from(meta: PostWithMeta) -> Self {
        let url = meta.post.url();
        Self {
            identifier: meta.post.identifier,
            title: meta.post.title,
            slug: meta.post.slug,
            body: meta.post.body,
            group_name: meta.post.group_name,
            username: meta.post.username,
            url,
            created_at: meta.post.created_at,
            updated_at: meta.post.updated_at,
            comment_count: meta.comment_count,
            like_score: tally(&meta.votes),
            user_vote: meta.viewer.map(|id| viewer_vote(&meta.votes, id)),
        }
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

/// Helper struct for building an annotated `CommentResponse`
#[derive(Debug)]
pub struct CommentWithVotes {
    pub comment: Comment,
    pub votes: Vec<Vote>,
    pub viewer: Option<Snowflake>,
}

impl From<CommentWithVotes> for CommentResponse {
    fn from(meta: CommentWithVotes) -> Self {
        Self {
            identifier: meta.comment.identifier,
            body: meta.comment.body,
            username: meta.comment.username,
            created_at: meta.comment.created_at,
            updated_at: meta.comment.updated_at,
            like_score: tally(&meta.votes),
            user_vote: meta.viewer.map(|id| viewer_vote(&meta.votes, id)),
        }
    }
}

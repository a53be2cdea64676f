//! User profile service
//!
//! Builds the public profile view: the user plus their posts and comments
//! merged into one feed, newest first.

use forum_core::entities::VoteTarget;
use forum_core::error::DomainError;
use forum_core::Snowflake;
use tracing::instrument;

use crate::dto::{
    CommentResponse, CommentWithVotes, PublicUserResponse, UserContentResponse,
    UserProfileResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::post::annotate_posts;

/// User profile service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public profile with the user's merged content feed
    #[instrument(skip(self))]
    pub async fn get_profile(
        &self,
        username: &str,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<UserProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;

        let posts = self.ctx.post_repo().find_by_author(&user.username).await?;
        let posts = annotate_posts(self.ctx, posts, viewer).await?;

        let comments = self
            .ctx
            .comment_repo()
            .find_by_author(&user.username)
            .await?;
        let mut annotated_comments = Vec::with_capacity(comments.len());
        for comment in comments {
            let votes = self
                .ctx
                .vote_repo()
                .find_for_target(VoteTarget::Comment(comment.id))
                .await?;
            annotated_comments.push(CommentResponse::from(CommentWithVotes {
                comment,
                votes,
                viewer,
            }));
        }

        let mut content: Vec<UserContentResponse> = posts
            .into_iter()
            .map(UserContentResponse::Post)
            .chain(annotated_comments.into_iter().map(UserContentResponse::Comment))
            .collect();
        content.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(UserProfileResponse {
            user: PublicUserResponse::from(&user),
            content,
        })
    }
}

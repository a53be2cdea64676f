//! Comment service
//!
//! Handles commenting on posts, listing a post's comments, and deletion.

use forum_core::entities::{Comment, VoteTarget};
use forum_core::error::DomainError;
use forum_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CommentWithVotes, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::post::resolve_user;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        author_id: Snowflake,
        identifier: &str,
        slug: &str,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let author = resolve_user(self.ctx, author_id).await?;

        let post = self
            .ctx
            .post_repo()
            .find_by_handle(identifier, slug)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(identifier.to_string()))?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            request.body,
            post.id,
            author.username,
        );

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post.id, "Comment created");

        Ok(CommentResponse::from(CommentWithVotes {
            comment,
            votes: Vec::new(),
            viewer: Some(author_id),
        }))
    }

    /// All comments on a post, newest first, annotated
    #[instrument(skip(self))]
    pub async fn post_comments(
        &self,
        identifier: &str,
        slug: &str,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let post = self
            .ctx
            .post_repo()
            .find_by_handle(identifier, slug)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(identifier.to_string()))?;

        let comments = self.ctx.comment_repo().find_by_post(post.id).await?;

        let mut responses = Vec::with_capacity(comments.len());
        for comment in comments {
            let votes = self
                .ctx
                .vote_repo()
                .find_for_target(VoteTarget::Comment(comment.id))
                .await?;
            responses.push(CommentResponse::from(CommentWithVotes {
                comment,
                votes,
                viewer,
            }));
        }

        Ok(responses)
    }

    /// Delete a comment; only its author may do this
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        user_id: Snowflake,
        comment_identifier: &str,
    ) -> ServiceResult<()> {
        let user = resolve_user(self.ctx, user_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_identifier(comment_identifier)
            .await?
            .ok_or_else(|| DomainError::CommentNotFound(comment_identifier.to_string()))?;

        if !comment.is_author(&user.username) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment.id).await?;

        info!(comment_id = %comment.id, "Comment deleted");

        Ok(())
    }
}

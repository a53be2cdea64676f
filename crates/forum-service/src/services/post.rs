//! Post service
//!
//! Handles post creation, listing, lookup, search, and deletion. Also
//! hosts the shared annotation helpers that load vote records and comment
//! counts for a post before it is serialized.

use forum_core::entities::{Post, VoteTarget};
use forum_core::error::DomainError;
use forum_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    CommentResponse, CommentWithVotes, CreatePostRequest, PostDetailResponse, PostResponse,
    PostWithMeta, SearchPostsRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for post listings
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Maximum page size a client may request
pub const MAX_PAGE_SIZE: i64 = 50;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post in an existing group
    #[instrument(skip(self, request), fields(group = %request.group_name))]
    pub async fn create_post(
        &self,
        author_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let author = resolve_user(self.ctx, author_id).await?;

        // The group must exist before anything is written
        if !self
            .ctx
            .group_repo()
            .name_exists(&request.group_name)
            .await?
        {
            return Err(DomainError::GroupNotFound(request.group_name).into());
        }

        let post = Post::new(
            self.ctx.generate_id(),
            request.title,
            request.body,
            request.group_name,
            author.username,
        );

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, identifier = %post.identifier, "Post created");

        annotate_post(self.ctx, post, Some(author_id)).await
    }

    /// Newest posts, offset paginated and annotated
    #[instrument(skip(self))]
    pub async fn recent_posts(
        &self,
        page: i64,
        count: i64,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let count = count.clamp(1, MAX_PAGE_SIZE);
        let offset = page.max(0).saturating_mul(count);

        let posts = self.ctx.post_repo().find_recent(offset, count).await?;
        annotate_posts(self.ctx, posts, viewer).await
    }

    /// Single post with its comments, everything annotated
    #[instrument(skip(self))]
    pub async fn get_post(
        &self,
        identifier: &str,
        slug: &str,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<PostDetailResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_handle(identifier, slug)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(identifier.to_string()))?;

        load_post_detail(self.ctx, post, viewer).await
    }

    /// Posts whose title starts with the query, newest first
    #[instrument(skip(self, request), fields(query = %request.query))]
    pub async fn search_posts(
        &self,
        request: SearchPostsRequest,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().search_by_title(&request.query).await?;
        annotate_posts(self.ctx, posts, viewer).await
    }

    /// Delete a post; only its author may do this
    #[instrument(skip(self))]
    pub async fn delete_post(&self, user_id: Snowflake, identifier: &str) -> ServiceResult<()> {
        let user = resolve_user(self.ctx, user_id).await?;

        let post = self
            .ctx
            .post_repo()
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(identifier.to_string()))?;

        if !post.is_author(&user.username) {
            return Err(DomainError::NotPostAuthor.into());
        }

        self.ctx.post_repo().delete(post.id).await?;

        info!(post_id = %post.id, "Post deleted");

        Ok(())
    }
}

// ============================================================================
// Shared annotation helpers
// ============================================================================

/// Look up the user behind an authenticated request
///
/// A valid token for a since-removed account reads as an invalid token.
pub(crate) async fn resolve_user(
    ctx: &ServiceContext,
    user_id: Snowflake,
) -> ServiceResult<forum_core::entities::User> {
    ctx.user_repo()
        .find_by_id(user_id)
        .await?
        .ok_or(ServiceError::App(forum_common::AppError::InvalidToken))
}

/// Annotate one post with its score, viewer vote, and comment count
pub(crate) async fn annotate_post(
    ctx: &ServiceContext,
    post: Post,
    viewer: Option<Snowflake>,
) -> ServiceResult<PostResponse> {
    let votes = ctx
        .vote_repo()
        .find_for_target(VoteTarget::Post(post.id))
        .await?;
    let comment_count = ctx.post_repo().comment_count(post.id).await?;

    Ok(PostResponse::from(PostWithMeta {
        post,
        comment_count,
        votes,
        viewer,
    }))
}

/// Annotate a list of posts, preserving order
pub(crate) async fn annotate_posts(
    ctx: &ServiceContext,
    posts: Vec<Post>,
    viewer: Option<Snowflake>,
) -> ServiceResult<Vec<PostResponse>> {
    let mut responses = Vec::with_capacity(posts.len());
    for post in posts {
        responses.push(annotate_post(ctx, post, viewer).await?);
    }
    Ok(responses)
}

/// Load a post's comments and annotate the whole tree
pub(crate) async fn load_post_detail(
    ctx: &ServiceContext,
    post: Post,
    viewer: Option<Snowflake>,
) -> ServiceResult<PostDetailResponse> {
    let post_votes = ctx
        .vote_repo()
        .find_for_target(VoteTarget::Post(post.id))
        .await?;

    let comments = ctx.comment_repo().find_by_post(post.id).await?;
    let mut comment_responses = Vec::with_capacity(comments.len());
    for comment in comments {
        let votes = ctx
            .vote_repo()
            .find_for_target(VoteTarget::Comment(comment.id))
            .await?;
        comment_responses.push(CommentResponse::from(CommentWithVotes {
            comment,
            votes,
            viewer,
        }));
    }

    let comment_count = i64::try_from(comment_responses.len()).unwrap_or(i64::MAX);
    let annotated = PostResponse::from(PostWithMeta {
        post,
        comment_count,
        votes: post_votes,
        viewer,
    });

    Ok(PostDetailResponse::from_post(annotated, comment_responses))
}

//! Comment handlers
//!
//! Endpoints for commenting on posts and deleting comments.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_service::{CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comment on a post
///
/// POST /posts/:identifier/:slug/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((identifier, slug)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .create_comment(auth.user_id, &identifier, &slug, request)
        .await?;
    Ok(Created(Json(response)))
}

/// List a post's comments
///
/// GET /posts/:identifier/:slug/comments
pub async fn post_comments(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path((identifier, slug)): Path<(String, String)>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service
        .post_comments(&identifier, &slug, viewer.viewer())
        .await?;
    Ok(Json(response))
}

/// Delete a comment (author only)
///
/// DELETE /comments/:identifier
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(identifier): Path<String>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(auth.user_id, &identifier).await?;
    Ok(NoContent)
}

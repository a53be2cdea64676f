//! Post handlers
//!
//! Endpoints for creating, listing, viewing, searching, and deleting posts.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_service::{
    CreatePostRequest, PostDetailResponse, PostResponse, PostService, SearchPostsRequest,
};

use crate::extractors::{AuthUser, OptionalAuthUser, Page, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Newest posts, paginated
///
/// GET /posts?page=0&count=5
pub async fn recent_posts(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    page: Page,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service
        .recent_posts(page.page, page.count, viewer.viewer())
        .await?;
    Ok(Json(response))
}

/// Get a single post with its comments
///
/// GET /posts/:identifier/:slug
pub async fn get_post(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path((identifier, slug)): Path<(String, String)>,
) -> ApiResult<Json<PostDetailResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get_post(&identifier, &slug, viewer.viewer()).await?;
    Ok(Json(response))
}

/// Search posts by title
///
/// POST /posts/search
pub async fn search_posts(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    ValidatedJson(request): ValidatedJson<SearchPostsRequest>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.search_posts(request, viewer.viewer()).await?;
    Ok(Json(response))
}

/// Delete a post (author only)
///
/// DELETE /posts/:identifier
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(identifier): Path<String>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete_post(auth.user_id, &identifier).await?;
    Ok(NoContent)
}

//! Group handlers
//!
//! Endpoints for creating, ranking, viewing, and deleting groups.

use axum::{
    extract::{Path, State},
    Json,
};
use forum_service::{
    CreateGroupRequest, GroupDetailResponse, GroupResponse, GroupService, TopGroupResponse,
};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new group
///
/// POST /groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGroupRequest>,
) -> ApiResult<Created<Json<GroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.create_group(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Most active groups by post count
///
/// GET /groups/top
pub async fn top_groups(State(state): State<AppState>) -> ApiResult<Json<Vec<TopGroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.top_groups().await?;
    Ok(Json(response))
}

/// Get a group with its posts
///
/// GET /groups/:name
pub async fn get_group(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(name): Path<String>,
) -> ApiResult<Json<GroupDetailResponse>> {
    let service = GroupService::new(state.service_context());
    let response = service.get_group(&name, viewer.viewer()).await?;
    Ok(Json(response))
}

/// Delete a group (owner only)
///
/// DELETE /groups/:name
pub async fn delete_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(name): Path<String>,
) -> ApiResult<NoContent> {
    let service = GroupService::new(state.service_context());
    service.delete_group(auth.user_id, &name).await?;
    Ok(NoContent)
}

//! User profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use forum_service::{UserProfileResponse, UserService};

use crate::extractors::OptionalAuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Public user profile with merged posts and comments
///
/// GET /users/:username
pub async fn get_profile(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(username): Path<String>,
) -> ApiResult<Json<UserProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(&username, viewer.viewer()).await?;
    Ok(Json(response))
}

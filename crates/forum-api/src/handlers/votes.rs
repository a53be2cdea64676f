//! Vote handlers
//!
//! One endpoint covers casting, flipping, and retracting votes on posts
//! and comments. Authentication is required; the response is the post
//! reloaded with fresh annotation so clients never compute scores locally.

use axum::{extract::State, Json};
use forum_service::{CastVoteRequest, PostDetailResponse, VoteService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Cast, flip, or retract a vote
///
/// POST /votes
pub async fn cast_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CastVoteRequest>,
) -> ApiResult<Json<PostDetailResponse>> {
    let service = VoteService::new(state.service_context());
    let response = service.cast_vote(auth.user_id, request).await?;
    Ok(Json(response))
}

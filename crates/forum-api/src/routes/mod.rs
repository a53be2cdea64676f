//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, comments, groups, health, posts, users, votes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(group_routes())
        .merge(post_routes())
        .merge(vote_routes())
        .merge(user_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::current_user))
}

/// Group routes
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups", post(groups::create_group))
        .route("/groups/top", get(groups::top_groups))
        .route("/groups/:name", get(groups::get_group))
        .route("/groups/:name", delete(groups::delete_group))
}

/// Post and comment routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post))
        .route("/posts", get(posts::recent_posts))
        .route("/posts/search", post(posts::search_posts))
        .route("/posts/:identifier/:slug", get(posts::get_post))
        .route("/posts/:identifier", delete(posts::delete_post))
        .route(
            "/posts/:identifier/:slug/comments",
            post(comments::create_comment),
        )
        .route(
            "/posts/:identifier/:slug/comments",
            get(comments::post_comments),
        )
        .route("/comments/:identifier", delete(comments::delete_comment))
}

/// Vote routes
fn vote_routes() -> Router<AppState> {
    Router::new().route("/votes", post(votes::cast_vote))
}

/// User profile routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:username", get(users::get_profile))
}

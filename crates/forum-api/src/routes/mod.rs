//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{admin, auth, comments, health, posts, votes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(vote_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/me", get(auth::me))
        .route("/auth/update", patch(auth::update_profile))
        .route("/auth/change-password", patch(auth::change_password))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/posts/:post_id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/comments/:comment_id",
            patch(comments::update_comment).delete(comments::delete_comment),
        )
}

/// Vote routes
fn vote_routes() -> Router<AppState> {
    Router::new().route("/votes", post(votes::cast_vote))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/:user_id/ban", patch(admin::toggle_ban))
        .route("/admin/analytics", get(admin::analytics))
        .route("/admin/check", get(admin::check))
}

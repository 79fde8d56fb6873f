//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use forum_common::TokenPair;
use forum_core::{VoteDirection, VoteOutcome};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Full account view, shown to the account owner and admins
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

/// Public identity attached to posts and comments
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
}

/// `GET /auth/me`
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: CurrentUserResponse,
    pub posts: Vec<PostResponse>,
    pub comment_count: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, user: CurrentUserResponse) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            user,
        }
    }
}

// ============================================================================
// Content Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub post_id: i64,
    pub author: AuthorResponse,
}

/// Post with author, vote totals and comment thread
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author: AuthorResponse,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comment_count: i64,
    pub comments: Vec<CommentResponse>,
}

/// Single post view; `user_vote` is the caller's vote when authenticated
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub user_vote: Option<VoteDirection>,
}

// ============================================================================
// Vote Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct VoteResponse {
    pub result: VoteOutcome,
    pub message: String,
    pub post_id: i64,
    /// Caller's vote after the cast, null when it was toggled off
    pub user_vote: Option<VoteDirection>,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

// ============================================================================
// Admin Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BanResponse {
    pub user_id: i64,
    pub is_banned: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopPostResponse {
    pub id: i64,
    pub title: String,
    pub score: i64,
    pub upvotes: i64,
    pub comments: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsResponse {
    pub total_users: i64,
    pub banned_users: i64,
    pub active_admins: i64,
    pub total_posts: i64,
    pub total_comments: i64,
    pub total_votes: i64,
    pub top_post: Option<TopPostResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminCheckResponse {
    pub is_admin: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

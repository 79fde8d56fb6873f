//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Required text fields default to empty so that a missing field and a blank
//! one are rejected the same way by the services.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    #[serde(default)]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: String,
}

/// Profile update; absent or blank fields keep their current value
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub old_password: String,

    #[serde(default)]
    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub new_password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    #[validate(length(max = 20000, message = "Content must be at most 20000 characters"))]
    pub content: Option<String>,

    #[validate(length(max = 300, message = "Link must be at most 300 characters"))]
    pub link: Option<String>,
}

/// Post edit; a present but blank content or link clears it
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 20000, message = "Content must be at most 20000 characters"))]
    pub content: Option<String>,

    #[validate(length(max = 300, message = "Link must be at most 300 characters"))]
    pub link: Option<String>,
}

/// Query string for `GET /posts`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub author_id: Option<i64>,
    pub keyword: Option<String>,
    /// `recent` (default) or `top`
    pub sort: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(length(max = 5000, message = "Comment must be at most 5000 characters"))]
    pub content: String,

    pub post_id: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    #[validate(length(max = 5000, message = "Comment must be at most 5000 characters"))]
    pub content: String,
}

/// Query string for `GET /comments`
#[derive(Debug, Clone, Deserialize)]
pub struct ListCommentsQuery {
    pub post_id: i64,
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Vote cast; `vote_type` must be `up` or `down`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CastVoteRequest {
    pub post_id: i64,

    #[serde(default, alias = "direction")]
    pub vote_type: String,
}

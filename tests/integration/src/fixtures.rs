//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};

/// Unique suffix for test data. Random so that reruns against the same
/// database never collide.
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("user-{}", &suffix[..8]),
            email: format!("test-{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// User response
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub is_banned: bool,
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: Option<String>,
    pub link: Option<String>,
}

impl CreatePostRequest {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some("Body text".to_string()),
            link: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub author: AuthorResponse,
}

/// Post response, also used for the single-post view
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub link: Option<String>,
    pub author: AuthorResponse,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comment_count: i64,
    pub comments: Vec<CommentResponse>,
    #[serde(default)]
    pub user_vote: Option<String>,
}

/// Vote request
#[derive(Debug, Serialize)]
pub struct VoteRequest {
    pub post_id: i64,
    pub vote_type: String,
}

impl VoteRequest {
    pub fn up(post_id: i64) -> Self {
        Self {
            post_id,
            vote_type: "up".to_string(),
        }
    }

    pub fn down(post_id: i64) -> Self {
        Self {
            post_id,
            vote_type: "down".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VoteResponse {
    pub result: String,
    pub post_id: i64,
    pub user_vote: Option<String>,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

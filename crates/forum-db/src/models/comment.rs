//! Comment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub post_id: i64,
}

/// Comment row joined with the author's name
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorModel {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub post_id: i64,
    pub author_name: String,
}

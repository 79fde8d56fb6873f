//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
}

/// Post row joined with author name, vote counts and comment count
#[derive(Debug, Clone, FromRow)]
pub struct PostSummaryModel {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub author_name: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comment_count: i64,
}

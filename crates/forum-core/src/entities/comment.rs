//! Comment entity

use chrono::{DateTime, Utc};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with its author's display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author_name: String,
}

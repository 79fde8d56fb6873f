//! Vote database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub value: i16,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
    pub post_id: i64,
}

/// Aggregated vote counts for one post
#[derive(Debug, Clone, Copy, FromRow)]
pub struct VoteTallyModel {
    pub upvotes: i64,
    pub downvotes: i64,
}

//! Admin analytics query rows

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ForumStatsModel {
    pub total_users: i64,
    pub banned_users: i64,
    pub active_admins: i64,
    pub total_posts: i64,
    pub total_comments: i64,
    pub total_votes: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct TopPostModel {
    pub id: i64,
    pub title: String,
    pub score: i64,
    pub upvotes: i64,
    pub comment_count: i64,
}

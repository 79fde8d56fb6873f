//! PostgreSQL implementation of AnalyticsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{ForumStats, TopPost};
use forum_core::traits::{AnalyticsRepository, RepoResult};

use crate::models::{ForumStatsModel, TopPostModel};

use super::error::map_db_error;

/// PostgreSQL implementation of AnalyticsRepository
#[derive(Clone)]
pub struct PgAnalyticsRepository {
    pool: PgPool,
}

impl PgAnalyticsRepository {
    /// Create a new PgAnalyticsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<ForumStats> {
        let totals = sqlx::query_as::<_, ForumStatsModel>(
            r"
            SELECT
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM users WHERE is_banned) AS banned_users,
                (SELECT COUNT(*) FROM users WHERE is_admin) AS active_admins,
                (SELECT COUNT(*) FROM posts) AS total_posts,
                (SELECT COUNT(*) FROM comments) AS total_comments,
                (SELECT COUNT(*) FROM votes) AS total_votes
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let top = sqlx::query_as::<_, TopPostModel>(
            r"
            SELECT p.id, p.title,
                   COALESCE(SUM(v.value), 0)::BIGINT AS score,
                   COUNT(v.id) FILTER (WHERE v.value = 1) AS upvotes,
                   (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count
            FROM posts p
            LEFT JOIN votes v ON v.post_id = p.id
            GROUP BY p.id
            ORDER BY score DESC, p.created_at DESC, p.id DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut stats = ForumStats::from(totals);
        stats.top_post = top.map(TopPost::from);
        Ok(stats)
    }
}

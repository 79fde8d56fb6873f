//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{Comment, CommentWithAuthor};
use forum_core::error::DomainError;
use forum_core::traits::{CommentRepository, NewComment, RepoResult};

use crate::models::{CommentModel, CommentWithAuthorModel};

use super::error::{map_db_error, map_post_reference};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, content, created_at, author_id, post_id
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_post(&self, post_id: i64) -> RepoResult<Vec<CommentWithAuthor>> {
        let models = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.content, c.created_at, c.author_id, c.post_id, u.name AS author_name
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = $1
            ORDER BY c.created_at, c.id
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self, comment), fields(post_id = comment.post_id, author_id = comment.author_id))]
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            INSERT INTO comments (content, author_id, post_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, created_at, author_id, post_id
            ",
        )
        .bind(&comment.content)
        .bind(comment.author_id)
        .bind(comment.post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_post_reference(e, comment.post_id))?;

        Ok(model.into())
    }

    #[instrument(skip(self, content))]
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<Comment> {
        let model = sqlx::query_as::<_, CommentModel>(
            r"
            UPDATE comments
            SET content = $2
            WHERE id = $1
            RETURNING id, content, created_at, author_id, post_id
            ",
        )
        .bind(id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Comment::from).ok_or(DomainError::CommentNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_by_author(&self, author_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

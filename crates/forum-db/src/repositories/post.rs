//! PostgreSQL implementation of PostRepository
//!
//! Listing queries compute vote totals and comment counts from the current
//! rows on every call.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{CommentWithAuthor, Post, PostSummary};
use forum_core::error::DomainError;
use forum_core::traits::{NewPost, PostChanges, PostRepository, RepoResult};
use forum_core::value_objects::{PostFilter, PostSort};

use crate::models::{CommentWithAuthorModel, PostModel, PostSummaryModel};

use super::error::{escape_like, map_db_error};

const SUMMARY_SELECT: &str = r"
    SELECT p.id, p.title, p.content, p.link, p.created_at, p.author_id,
           u.name AS author_name,
           COUNT(v.id) FILTER (WHERE v.value = 1) AS upvotes,
           COUNT(v.id) FILTER (WHERE v.value = -1) AS downvotes,
           (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count
    FROM posts p
    JOIN users u ON u.id = p.author_id
    LEFT JOIN votes v ON v.post_id = p.id
";

fn order_clause(sort: PostSort) -> &'static str {
    match sort {
        PostSort::Recent => "p.created_at DESC, p.id DESC",
        PostSort::Top => "COALESCE(SUM(v.value), 0) DESC, p.created_at DESC, p.id DESC",
    }
}

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load comments for every listed post with one query and attach them
    async fn attach_comments(&self, posts: &mut [PostSummary]) -> RepoResult<()> {
        if posts.is_empty() {
            return Ok(());
        }

        let ids: Vec<i64> = posts.iter().map(|p| p.post.id).collect();
        let rows = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.content, c.created_at, c.author_id, c.post_id, u.name AS author_name
            FROM comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = ANY($1)
            ORDER BY c.created_at, c.id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_post: HashMap<i64, Vec<CommentWithAuthor>> = HashMap::new();
        for row in rows {
            by_post
                .entry(row.post_id)
                .or_default()
                .push(CommentWithAuthor::from(row));
        }

        for summary in posts {
            summary.comments = by_post.remove(&summary.post.id).unwrap_or_default();
        }

        Ok(())
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, title, content, link, created_at, author_id
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, post), fields(author_id = post.author_id))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (title, content, link, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, link, created_at, author_id
            ",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.link)
        .bind(post.author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, changes: &PostChanges) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            UPDATE posts
            SET title = COALESCE($2, title),
                content = CASE WHEN $3 THEN $4::TEXT ELSE content END,
                link = CASE WHEN $5 THEN $6::VARCHAR ELSE link END
            WHERE id = $1
            RETURNING id, title, content, link, created_at, author_id
            ",
        )
        .bind(id)
        .bind(&changes.title)
        .bind(changes.content.is_some())
        .bind(changes.content.clone().flatten())
        .bind(changes.link.is_some())
        .bind(changes.link.clone().flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Post::from).ok_or(DomainError::PostNotFound(id))
    }

    /// Comments and votes go with the post through `ON DELETE CASCADE`
    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &PostFilter, sort: PostSort) -> RepoResult<Vec<PostSummary>> {
        let pattern = filter
            .keyword
            .as_deref()
            .map(|k| format!("%{}%", escape_like(k)));

        let sql = format!(
            r"{SUMMARY_SELECT}
            WHERE ($1::BIGINT IS NULL OR p.author_id = $1)
              AND ($2::TEXT IS NULL OR p.title ILIKE $2 ESCAPE '\' OR p.content ILIKE $2 ESCAPE '\')
            GROUP BY p.id, u.name
            ORDER BY {}
            ",
            order_clause(sort)
        );

        let models = sqlx::query_as::<_, PostSummaryModel>(&sql)
            .bind(filter.author_id)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut posts: Vec<PostSummary> = models.into_iter().map(PostSummary::from).collect();
        self.attach_comments(&mut posts).await?;

        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn summary(&self, id: i64) -> RepoResult<Option<PostSummary>> {
        let sql = format!("{SUMMARY_SELECT} WHERE p.id = $1 GROUP BY p.id, u.name");

        let model = sqlx::query_as::<_, PostSummaryModel>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let mut posts = [PostSummary::from(model)];
        self.attach_comments(&mut posts).await?;
        let [summary] = posts;

        Ok(Some(summary))
    }
}

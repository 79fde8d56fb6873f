//! PostgreSQL implementation of VoteRepository
//!
//! A cast runs inside one transaction: the post row is key-share locked so it
//! cannot disappear mid-cast, the voter's existing row is locked `FOR UPDATE`,
//! and the toggle rule decides between insert, update and delete. Two first
//! votes racing on the same (user, post) both see no row; the loser hits
//! `unique_vote` and reports `ConcurrentVote`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use forum_core::entities::{Vote, VoteAction};
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, VoteRepository};
use forum_core::value_objects::{VoteDirection, VoteTally};

use crate::models::{VoteModel, VoteTallyModel};

use super::error::{map_db_error, map_post_reference, map_unique_violation};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: i64, post_id: i64) -> RepoResult<Option<Vote>> {
        let model = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT id, value, created_at, user_id, post_id
            FROM votes
            WHERE user_id = $1 AND post_id = $2
            ",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Vote::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn cast(
        &self,
        user_id: i64,
        post_id: i64,
        direction: VoteDirection,
    ) -> RepoResult<VoteAction> {
        // Dropping the transaction on any early return rolls it back
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let post = sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE id = $1 FOR KEY SHARE")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if post.is_none() {
            return Err(DomainError::PostNotFound(post_id));
        }

        let existing = sqlx::query_as::<_, VoteModel>(
            r"
            SELECT id, value, created_at, user_id, post_id
            FROM votes
            WHERE user_id = $1 AND post_id = $2
            FOR UPDATE
            ",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .map(Vote::try_from)
        .transpose()?;

        let action = VoteAction::resolve(existing.map(|v| v.direction), direction);

        match action {
            VoteAction::Insert(dir) => {
                sqlx::query("INSERT INTO votes (value, user_id, post_id) VALUES ($1, $2, $3)")
                    .bind(dir.value())
                    .bind(user_id)
                    .bind(post_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        if e.as_database_error()
                            .is_some_and(|db| db.is_foreign_key_violation())
                        {
                            map_post_reference(e, post_id)
                        } else {
                            map_unique_violation(e, || DomainError::ConcurrentVote)
                        }
                    })?;
            }
            VoteAction::Update(dir) => {
                sqlx::query("UPDATE votes SET value = $3 WHERE user_id = $1 AND post_id = $2")
                    .bind(user_id)
                    .bind(post_id)
                    .bind(dir.value())
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
            VoteAction::Delete => {
                sqlx::query("DELETE FROM votes WHERE user_id = $1 AND post_id = $2")
                    .bind(user_id)
                    .bind(post_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_db_error)?;
            }
        }

        tx.commit().await.map_err(map_db_error)?;
        debug!(outcome = ?action.outcome(), "Vote applied");

        Ok(action)
    }

    #[instrument(skip(self))]
    async fn tally(&self, post_id: i64) -> RepoResult<VoteTally> {
        let model = sqlx::query_as::<_, VoteTallyModel>(
            r"
            SELECT COUNT(*) FILTER (WHERE value = 1) AS upvotes,
                   COUNT(*) FILTER (WHERE value = -1) AS downvotes
            FROM votes
            WHERE post_id = $1
            ",
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }
}

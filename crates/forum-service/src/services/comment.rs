//! Comment service

use forum_core::entities::{Comment, CommentWithAuthor, User};
use forum_core::traits::NewComment;
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::fields::required_text;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, post_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        if !self.ctx.post_repo().exists(post_id).await? {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        let comments = self.ctx.comment_repo().list_by_post(post_id).await?;

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    #[instrument(skip(self, author, request), fields(author_id = author.id, post_id = request.post_id))]
    pub async fn create_comment(
        &self,
        author: &User,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let content = required_text("content", &request.content)?;

        if !self.ctx.post_repo().exists(request.post_id).await? {
            return Err(DomainError::PostNotFound(request.post_id).into());
        }

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                content,
                author_id: author.id,
                post_id: request.post_id,
            })
            .await?;

        info!(comment_id = comment.id, "Comment created");

        Ok(with_author(comment, author.name.clone()))
    }

    /// Edit a comment; owner or admin only
    #[instrument(skip(self, user, request), fields(user_id = user.id))]
    pub async fn update_comment(
        &self,
        user: &User,
        comment_id: i64,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let comment = self.find_comment(comment_id).await?;
        AccessService::require_manage(user, comment.author_id)?;

        let content = required_text("content", &request.content)?;
        let updated = self
            .ctx
            .comment_repo()
            .update_content(comment_id, &content)
            .await?;

        info!(comment_id, "Comment updated");

        let author_name = self.author_name(user, updated.author_id).await?;
        Ok(with_author(updated, author_name))
    }

    /// Delete a comment; owner or admin only
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn delete_comment(&self, user: &User, comment_id: i64) -> ServiceResult<()> {
        let comment = self.find_comment(comment_id).await?;
        AccessService::require_manage(user, comment.author_id)?;

        self.ctx.comment_repo().delete(comment_id).await?;
        info!(comment_id, "Comment deleted");

        Ok(())
    }

    async fn find_comment(&self, comment_id: i64) -> ServiceResult<Comment> {
        self.ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| DomainError::CommentNotFound(comment_id).into())
    }

    /// Display name of a comment's author, skipping the lookup when the
    /// caller wrote it
    async fn author_name(&self, caller: &User, author_id: i64) -> ServiceResult<String> {
        if caller.id == author_id {
            return Ok(caller.name.clone());
        }
        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;
        Ok(author.name)
    }
}

fn with_author(comment: Comment, author_name: String) -> CommentResponse {
    CommentResponse::from(CommentWithAuthor {
        comment,
        author_name,
    })
}

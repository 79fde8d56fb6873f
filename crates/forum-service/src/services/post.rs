//! Post service
//!
//! Handles post creation, the aggregated listings and owner-or-admin edits.

use forum_core::entities::{PostSummary, User};
use forum_core::traits::{NewPost, PostChanges};
use forum_core::value_objects::{PostFilter, PostSort, VoteTally};
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{
    CreatePostRequest, ListPostsQuery, PostDetailResponse, PostResponse, UpdatePostRequest,
};

use super::access::AccessService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::fields::{optional_text, required_text};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post owned by `author`
    #[instrument(skip(self, author, request), fields(author_id = author.id))]
    pub async fn create_post(
        &self,
        author: &User,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let new_post = NewPost {
            title: required_text("title", &request.title)?,
            content: optional_text(request.content),
            link: optional_text(request.link),
            author_id: author.id,
        };

        let post = self.ctx.post_repo().create(&new_post).await?;
        info!(post_id = post.id, "Post created");

        // A fresh post has no votes or comments yet
        Ok(PostResponse::from(PostSummary {
            post,
            author_name: author.name.clone(),
            tally: VoteTally::default(),
            comment_count: 0,
            comments: Vec::new(),
        }))
    }

    /// List posts with their vote totals and comments
    #[instrument(skip(self))]
    pub async fn list_posts(&self, query: ListPostsQuery) -> ServiceResult<Vec<PostResponse>> {
        let sort = query
            .sort
            .as_deref()
            .map(str::parse::<PostSort>)
            .transpose()?
            .unwrap_or_default();

        let filter = PostFilter {
            author_id: query.author_id,
            keyword: None,
        }
        .with_keyword(query.keyword);

        let posts = self.ctx.post_repo().list(&filter, sort).await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Single post; includes the viewer's own vote when a viewer is given
    #[instrument(skip(self))]
    pub async fn get_post(
        &self,
        post_id: i64,
        viewer_id: Option<i64>,
    ) -> ServiceResult<PostDetailResponse> {
        let summary = self
            .ctx
            .post_repo()
            .summary(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        let user_vote = match viewer_id {
            Some(user_id) => self
                .ctx
                .vote_repo()
                .find(user_id, post_id)
                .await?
                .map(|vote| vote.direction),
            None => None,
        };

        Ok(PostDetailResponse {
            post: PostResponse::from(summary),
            user_vote,
        })
    }

    /// Edit a post; owner or admin only
    #[instrument(skip(self, user, request), fields(user_id = user.id))]
    pub async fn update_post(
        &self,
        user: &User,
        post_id: i64,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        AccessService::require_manage(user, post.author_id)?;

        let changes = PostChanges {
            title: request
                .title
                .map(|title| required_text("title", &title))
                .transpose()?,
            content: request.content.map(|c| optional_text(Some(c))),
            link: request.link.map(|l| optional_text(Some(l))),
        };

        self.ctx.post_repo().update(post_id, &changes).await?;
        info!(post_id, "Post updated");

        let summary = self
            .ctx
            .post_repo()
            .summary(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        Ok(PostResponse::from(summary))
    }

    /// Delete a post with its comments and votes; owner or admin only
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn delete_post(&self, user: &User, post_id: i64) -> ServiceResult<()> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        AccessService::require_manage(user, post.author_id)?;

        self.ctx.post_repo().delete(post_id).await?;
        info!(post_id, "Post deleted");

        Ok(())
    }
}

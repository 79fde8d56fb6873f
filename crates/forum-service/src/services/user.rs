//! User service
//!
//! Handles the caller's own profile.

use forum_core::entities::User;
use forum_core::traits::ProfileChanges;
use forum_core::value_objects::{PostFilter, PostSort};
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CurrentUserResponse, PostResponse, ProfileResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::fields::{normalize_email, optional_text};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Profile of the caller with their posts (newest first) and comment count
    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn me(&self, user: &User) -> ServiceResult<ProfileResponse> {
        let posts = self
            .ctx
            .post_repo()
            .list(&PostFilter::by_author(user.id), PostSort::Recent)
            .await?;
        let comment_count = self.ctx.comment_repo().count_by_author(user.id).await?;

        Ok(ProfileResponse {
            user: CurrentUserResponse::from(user),
            posts: posts.into_iter().map(PostResponse::from).collect(),
            comment_count,
        })
    }

    /// Update name and/or email; blank values are ignored
    #[instrument(skip(self, user, request), fields(user_id = user.id))]
    pub async fn update_profile(
        &self,
        user: &User,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let changes = ProfileChanges {
            name: optional_text(request.name),
            email: optional_text(request.email).map(|e| normalize_email(&e)),
        };

        if let Some(email) = changes.email.as_deref() {
            if email != user.email && self.ctx.user_repo().email_exists(email).await? {
                return Err(DomainError::EmailAlreadyExists.into());
            }
        }

        if changes.name.is_none() && changes.email.is_none() {
            return Ok(CurrentUserResponse::from(user));
        }

        let updated = self.ctx.user_repo().update_profile(user.id, &changes).await?;
        info!(user_id = user.id, "User profile updated");

        Ok(CurrentUserResponse::from(&updated))
    }
}

//! Access-control gate
//!
//! Every mutating request passes through the same stages: the token yields a
//! user id, the id must resolve to a live, unbanned account, and admin-only
//! or owner-only actions add one more check on top.

use forum_common::AppError;
use forum_core::entities::User;
use forum_core::DomainError;
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Access-control service
pub struct AccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessService<'a> {
    /// Create a new AccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the caller and require an active account
    #[instrument(skip(self))]
    pub async fn active_user(&self, user_id: i64) -> ServiceResult<User> {
        let user = self.ctx.user_repo().find_by_id(user_id).await?;
        Self::require_active(user)
    }

    /// Load the caller and require an active admin account
    #[instrument(skip(self))]
    pub async fn admin_user(&self, user_id: i64) -> ServiceResult<User> {
        let user = self.active_user(user_id).await?;
        Self::require_admin(user)
    }

    /// A token whose account is gone is treated as invalid; banned accounts
    /// are refused.
    pub fn require_active(user: Option<User>) -> ServiceResult<User> {
        let user = user.ok_or(AppError::InvalidToken)?;
        if user.is_banned() {
            warn!(user_id = user.id, "Rejected request from banned user");
            return Err(DomainError::UserBanned.into());
        }
        Ok(user)
    }

    pub fn require_admin(user: User) -> ServiceResult<User> {
        if !user.is_admin() {
            warn!(user_id = user.id, "Rejected admin request from non-admin");
            return Err(DomainError::AdminRequired.into());
        }
        Ok(user)
    }

    /// Owner-or-admin check for editing and deleting content
    pub fn require_manage(user: &User, owner_id: i64) -> ServiceResult<()> {
        if user.can_manage(owner_id) {
            Ok(())
        } else {
            Err(DomainError::NotResourceOwner.into())
        }
    }
}

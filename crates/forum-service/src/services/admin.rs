//! Admin service
//!
//! User moderation, site analytics and the bootstrap admin account.

use forum_common::auth::hash_password;
use forum_common::AdminSeedConfig;
use forum_core::entities::User;
use forum_core::traits::NewUser;
use forum_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{AdminCheckResponse, AnalyticsResponse, BanResponse, CurrentUserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::fields::{required_email, required_password, required_text};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All accounts, oldest first
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<CurrentUserResponse>> {
        let users = self.ctx.user_repo().list_all().await?;
        Ok(users.iter().map(CurrentUserResponse::from).collect())
    }

    /// Flip a user's ban flag
    #[instrument(skip(self, admin), fields(admin_id = admin.id))]
    pub async fn toggle_ban(&self, admin: &User, user_id: i64) -> ServiceResult<BanResponse> {
        if admin.id == user_id {
            return Err(DomainError::CannotBanSelf.into());
        }

        let user = self
            .ctx
            .user_repo()
            .toggle_ban(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let message = if user.is_banned {
            warn!(user_id, "User banned");
            "User banned"
        } else {
            info!(user_id, "User unbanned");
            "User unbanned"
        };

        Ok(BanResponse {
            user_id: user.id,
            is_banned: user.is_banned,
            message: message.to_string(),
        })
    }

    /// Site-wide totals and the current top post
    #[instrument(skip(self))]
    pub async fn analytics(&self) -> ServiceResult<AnalyticsResponse> {
        let stats = self.ctx.analytics_repo().stats().await?;
        Ok(AnalyticsResponse::from(stats))
    }

    /// Reaching this means the caller already passed the admin gate
    pub fn check(admin: &User) -> AdminCheckResponse {
        AdminCheckResponse {
            is_admin: admin.is_admin(),
        }
    }

    /// Create the configured admin account unless its email is already taken.
    /// Returns whether an account was created.
    #[instrument(skip(self, seed), fields(email = %seed.email))]
    pub async fn seed_admin(&self, seed: &AdminSeedConfig) -> ServiceResult<bool> {
        let email = required_email(&seed.email)?;
        required_password("password", &seed.password)?;

        if self.ctx.user_repo().email_exists(&email).await? {
            info!("Admin account already present");
            return Ok(false);
        }

        let password_hash = hash_password(&seed.password)?;
        let admin = self
            .ctx
            .user_repo()
            .create(&NewUser {
                name: required_text("name", &seed.name)?,
                email,
                password_hash,
                is_admin: true,
            })
            .await?;

        info!(user_id = admin.id, "Admin account created");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_check_reports_admin_flag() {
        let admin = User {
            id: 1,
            name: "root".to_string(),
            email: "root@example.com".to_string(),
            is_admin: true,
            is_banned: false,
            created_at: Utc::now(),
        };
        assert!(AdminService::check(&admin).is_admin);
    }
}

//! Authentication service
//!
//! Handles registration, login, token refresh and password changes.

use forum_common::auth::{hash_password, verify_password};
use forum_common::AppError;
use forum_core::entities::User;
use forum_core::traits::NewUser;
use forum_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, ChangePasswordRequest, CurrentUserResponse, LoginRequest, MessageResponse,
    RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::fields::{required_email, required_password, required_text};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<CurrentUserResponse> {
        let name = required_text("name", &request.name)?;
        let email = required_email(&request.email)?;
        required_password("password", &request.password)?;

        if self.ctx.user_repo().email_exists(&email).await? {
            warn!(email = %email, "Registration rejected: email already registered");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        // A racing registration still hits the unique index and maps to the same conflict
        let user = self
            .ctx
            .user_repo()
            .create(&NewUser {
                name,
                email,
                password_hash,
                is_admin: false,
            })
            .await?;

        info!(user_id = user.id, "User registered successfully");

        Ok(CurrentUserResponse::from(&user))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = required_email(&request.email)?;
        required_password("password", &request.password)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        if user.is_banned() {
            warn!(user_id = user.id, "Login refused: user is banned");
            return Err(DomainError::UserBanned.into());
        }

        let tokens = self.ctx.jwt_service().issue_session(user.id)?;

        info!(user_id = user.id, "User logged in successfully");

        Ok(AuthResponse::new(tokens, CurrentUserResponse::from(&user)))
    }

    /// Exchange a refresh token for a new token pair in the same session
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)?;
        let user_id = claims.user_id()?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if user.is_banned() {
            warn!(user_id, "Refresh refused: user is banned");
            return Err(DomainError::UserBanned.into());
        }

        let tokens = self
            .ctx
            .jwt_service()
            .generate_token_pair_with_session(user.id, claims.session_id)?;

        info!(user_id, "Tokens refreshed successfully");

        Ok(AuthResponse::new(tokens, CurrentUserResponse::from(&user)))
    }

    /// Replace the caller's password after verifying the current one
    #[instrument(skip(self, user, request), fields(user_id = user.id))]
    pub async fn change_password(
        &self,
        user: &User,
        request: ChangePasswordRequest,
    ) -> ServiceResult<MessageResponse> {
        required_password("old_password", &request.old_password)?;
        required_password("new_password", &request.new_password)?;

        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or(DomainError::UserNotFound(user.id))?;

        if !verify_password(&request.old_password, &current_hash)? {
            warn!(user_id = user.id, "Password change rejected: incorrect current password");
            return Err(DomainError::IncorrectPassword.into());
        }

        let new_hash = hash_password(&request.new_password)?;
        self.ctx.user_repo().update_password(user.id, &new_hash).await?;

        info!(user_id = user.id, "Password changed");

        Ok(MessageResponse::new("Password updated successfully"))
    }
}

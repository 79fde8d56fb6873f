//! Authentication handlers
//!
//! Endpoints for registration, login, token refresh and the caller's own
//! account.

use axum::{extract::State, Json};
use forum_service::{
    AuthResponse, AuthService, ChangePasswordRequest, CurrentUserResponse, LoginRequest,
    MessageResponse, ProfileResponse, RefreshTokenRequest, RegisterRequest, UpdateProfileRequest,
    UserService,
};

use crate::extractors::{ActiveUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<CurrentUserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}

/// Caller's profile, posts and comment count
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.me(&user).await?;
    Ok(Json(response))
}

/// PATCH /auth/update
pub async fn update_profile(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(&user, request).await?;
    Ok(Json(response))
}

/// PATCH /auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.change_password(&user, request).await?;
    Ok(Json(response))
}

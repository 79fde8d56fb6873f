//! Admin handlers
//!
//! Every handler here takes `AdminUser`, so non-admins never reach the
//! service layer.

use axum::{extract::State, Json};
use forum_service::{
    AdminCheckResponse, AdminService, AnalyticsResponse, BanResponse, CurrentUserResponse,
};

use crate::extractors::{AdminUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<Vec<CurrentUserResponse>>> {
    let service = AdminService::new(state.service_context());
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Ban or unban a user
///
/// PATCH /admin/users/{user_id}/ban
pub async fn toggle_ban(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<BanResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.toggle_ban(&admin, user_id).await?;
    Ok(Json(response))
}

/// GET /admin/analytics
pub async fn analytics(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<AnalyticsResponse>> {
    let service = AdminService::new(state.service_context());
    let response = service.analytics().await?;
    Ok(Json(response))
}

/// GET /admin/check
pub async fn check(AdminUser(admin): AdminUser) -> Json<AdminCheckResponse> {
    Json(AdminService::check(&admin))
}

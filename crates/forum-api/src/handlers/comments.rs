//! Comment handlers

use axum::{extract::State, Json};
use forum_service::{
    CommentResponse, CommentService, CreateCommentRequest, ListCommentsQuery,
    UpdateCommentRequest,
};

use crate::extractors::{ActiveUser, ApiQuery, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /comments?post_id=
pub async fn list_comments(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListCommentsQuery>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(query.post_id).await?;
    Ok(Json(comments))
}

/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create_comment(&user, request).await?;
    Ok(Created(Json(response)))
}

/// PATCH /comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.update_comment(&user, comment_id, request).await?;
    Ok(Json(response))
}

/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(&user, comment_id).await?;
    Ok(NoContent)
}

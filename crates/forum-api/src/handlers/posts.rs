//! Post handlers

use axum::{extract::State, Json};
use forum_service::{
    CreatePostRequest, ListPostsQuery, PostDetailResponse, PostResponse, PostService,
    UpdatePostRequest,
};

use crate::extractors::{ActiveUser, ApiQuery, IdPath, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create_post(&user, request).await?;
    Ok(Created(Json(response)))
}

/// List posts, optionally filtered by author or keyword
///
/// GET /posts?author_id=&keyword=&sort=recent|top
pub async fn list_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListPostsQuery>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts(query).await?;
    Ok(Json(posts))
}

/// Get post by ID
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<PostDetailResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get_post(post_id, viewer.user_id()).await?;
    Ok(Json(response))
}

/// PATCH /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    IdPath(post_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.update_post(&user, post_id, request).await?;
    Ok(Json(response))
}

/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    IdPath(post_id): IdPath,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete_post(&user, post_id).await?;
    Ok(NoContent)
}

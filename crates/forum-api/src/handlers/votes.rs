//! Vote handlers

use axum::{extract::State, Json};
use forum_service::{CastVoteRequest, VoteResponse, VoteService};

use crate::extractors::{ActiveUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Cast, flip or withdraw a vote
///
/// POST /votes
pub async fn cast_vote(
    State(state): State<AppState>,
    ActiveUser(user): ActiveUser,
    ValidatedJson(request): ValidatedJson<CastVoteRequest>,
) -> ApiResult<Json<VoteResponse>> {
    let service = VoteService::new(state.service_context());
    let response = service.cast_vote(&user, request).await?;
    Ok(Json(response))
}

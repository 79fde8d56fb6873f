//! Vote service
//!
//! Casts votes through the ledger and reports the post's fresh totals.

use forum_core::entities::User;
use forum_core::value_objects::VoteDirection;
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CastVoteRequest, VoteResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast `up` or `down` on a post. Repeating the current direction
    /// removes the vote; the opposite direction flips it.
    #[instrument(skip(self, voter, request), fields(user_id = voter.id, post_id = request.post_id))]
    pub async fn cast_vote(
        &self,
        voter: &User,
        request: CastVoteRequest,
    ) -> ServiceResult<VoteResponse> {
        let direction = parse_direction(&request.vote_type)?;

        let action = self
            .ctx
            .vote_repo()
            .cast(voter.id, request.post_id, direction)
            .await?;
        let tally = self.ctx.vote_repo().tally(request.post_id).await?;

        let outcome = action.outcome();
        info!(outcome = ?outcome, score = tally.score(), "Vote cast");

        Ok(VoteResponse {
            result: outcome,
            message: outcome.message().to_string(),
            post_id: request.post_id,
            user_vote: action.resulting_direction(),
            score: tally.score(),
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
        })
    }
}

fn parse_direction(raw: &str) -> Result<VoteDirection, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DomainError::MissingField("vote_type"));
    }
    raw.parse()
}

//! Vote entity and the toggle rule applied when a user votes again

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::VoteDirection;

/// One user's vote on one post. At most one exists per (user, post).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: i64,
    pub user_id: i64,
    pub post_id: i64,
    pub direction: VoteDirection,
    pub created_at: DateTime<Utc>,
}

/// Write the ledger must perform for a cast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    Insert(VoteDirection),
    Update(VoteDirection),
    Delete,
}

/// What a cast did, as reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteOutcome {
    Recorded,
    Updated,
    Removed,
}

impl VoteAction {
    /// Decide the write for a cast given the user's current vote on the post.
    ///
    /// Casting the same direction twice removes the vote; casting the other
    /// direction flips it in place.
    pub fn resolve(existing: Option<VoteDirection>, requested: VoteDirection) -> Self {
        match existing {
            None => Self::Insert(requested),
            Some(current) if current == requested => Self::Delete,
            Some(_) => Self::Update(requested),
        }
    }

    pub fn outcome(self) -> VoteOutcome {
        match self {
            Self::Insert(_) => VoteOutcome::Recorded,
            Self::Update(_) => VoteOutcome::Updated,
            Self::Delete => VoteOutcome::Removed,
        }
    }

    /// The user's vote once the action is applied
    pub fn resulting_direction(self) -> Option<VoteDirection> {
        match self {
            Self::Insert(direction) | Self::Update(direction) => Some(direction),
            Self::Delete => None,
        }
    }
}

impl VoteOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Recorded => "Vote recorded",
            Self::Updated => "Vote updated",
            Self::Removed => "Vote removed",
        }
    }
}

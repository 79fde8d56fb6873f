//! Per-post vote totals

use serde::Serialize;

/// Counts of up and down votes on a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl VoteTally {
    pub const fn new(upvotes: i64, downvotes: i64) -> Self {
        Self { upvotes, downvotes }
    }

    /// Sum of vote values: each up counts +1, each down -1
    #[inline]
    pub const fn score(self) -> i64 {
        self.upvotes - self.downvotes
    }
}

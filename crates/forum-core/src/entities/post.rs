//! Post entity and its read-side projection

use chrono::{DateTime, Utc};

use crate::entities::CommentWithAuthor;
use crate::value_objects::VoteTally;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub link: Option<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A post together with everything the listing views show about it:
/// author name, vote totals and the comment thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub post: Post,
    pub author_name: String,
    pub tally: VoteTally,
    pub comment_count: i64,
    pub comments: Vec<CommentWithAuthor>,
}

impl PostSummary {
    /// Sum of all vote values on the post
    #[inline]
    pub fn score(&self) -> i64 {
        self.tally.score()
    }
}

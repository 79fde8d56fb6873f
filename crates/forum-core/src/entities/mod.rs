//! Domain entities - core business objects

mod analytics;
mod comment;
mod post;
mod user;
mod vote;

pub use analytics::{ForumStats, TopPost};
pub use comment::{Comment, CommentWithAuthor};
pub use post::{Post, PostSummary};
pub use user::User;
pub use vote::{Vote, VoteAction, VoteOutcome};

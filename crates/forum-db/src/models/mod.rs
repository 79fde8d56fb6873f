//! Database models - SQLx-compatible structs for PostgreSQL tables

mod analytics;
mod comment;
mod post;
mod user;
mod vote;

pub use analytics::{ForumStatsModel, TopPostModel};
pub use comment::{CommentModel, CommentWithAuthorModel};
pub use post::{PostModel, PostSummaryModel};
pub use user::UserModel;
pub use vote::{VoteModel, VoteTallyModel};

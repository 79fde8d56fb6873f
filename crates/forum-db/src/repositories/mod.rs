//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod analytics;
mod comment;
mod error;
mod post;
mod user;
mod vote;

pub use analytics::PgAnalyticsRepository;
pub use comment::PgCommentRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;

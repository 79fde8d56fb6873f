//! # forum-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Comment, CommentWithAuthor, ForumStats, Post, PostSummary, TopPost, User, Vote, VoteAction,
    VoteOutcome,
};
pub use error::DomainError;
pub use traits::{
    AnalyticsRepository, CommentRepository, NewComment, NewPost, NewUser, PostChanges,
    PostRepository, ProfileChanges, RepoResult, UserRepository, VoteRepository,
};
pub use value_objects::{PostFilter, PostSort, VoteDirection, VoteTally};

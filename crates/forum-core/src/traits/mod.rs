//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AnalyticsRepository, CommentRepository, NewComment, NewPost, NewUser, PostChanges,
    PostRepository, ProfileChanges, RepoResult, UserRepository, VoteRepository,
};

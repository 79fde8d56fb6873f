//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Comment, CommentWithAuthor, ForumStats, Post, PostSummary, User, Vote, VoteAction,
};
use crate::error::DomainError;
use crate::value_objects::{PostFilter, PostSort, VoteDirection, VoteTally};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Fields for a new account. Identifiers and timestamps are assigned by storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Profile fields to overwrite; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub link: Option<String>,
    pub author_id: i64,
}

/// Post fields to overwrite. Inner `None` on content/link clears the column.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<Option<String>>,
    pub link: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub author_id: i64,
    pub post_id: i64,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Update name and/or email
    async fn update_profile(&self, id: i64, changes: &ProfileChanges) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;

    /// All users, oldest first
    async fn list_all(&self) -> RepoResult<Vec<User>>;

    /// Flip the banned flag, returning the updated user
    async fn toggle_ban(&self, id: i64) -> RepoResult<Option<User>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>>;

    /// Check if a post exists
    async fn exists(&self, id: i64) -> RepoResult<bool>;

    /// Create a new post
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Apply changes to a post
    async fn update(&self, id: i64, changes: &PostChanges) -> RepoResult<Post>;

    /// Delete a post together with its comments and votes
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// List posts with vote totals and comments
    async fn list(&self, filter: &PostFilter, sort: PostSort) -> RepoResult<Vec<PostSummary>>;

    /// Single post with vote totals and comments
    async fn summary(&self, id: i64) -> RepoResult<Option<PostSummary>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// Comments on a post with author names, oldest first
    async fn list_by_post(&self, post_id: i64) -> RepoResult<Vec<CommentWithAuthor>>;

    /// Create a new comment
    async fn create(&self, comment: &NewComment) -> RepoResult<Comment>;

    /// Replace comment content
    async fn update_content(&self, id: i64, content: &str) -> RepoResult<Comment>;

    /// Delete a comment
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Number of comments written by a user
    async fn count_by_author(&self, author_id: i64) -> RepoResult<i64>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// A user's current vote on a post
    async fn find(&self, user_id: i64, post_id: i64) -> RepoResult<Option<Vote>>;

    /// Cast a vote, applying the toggle rule atomically.
    ///
    /// Returns the action that was applied. Fails with `PostNotFound` when
    /// the post does not exist.
    async fn cast(
        &self,
        user_id: i64,
        post_id: i64,
        direction: VoteDirection,
    ) -> RepoResult<VoteAction>;

    /// Current up/down counts for a post
    async fn tally(&self, post_id: i64) -> RepoResult<VoteTally>;
}

// ============================================================================
// Analytics Repository
// ============================================================================

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Site-wide totals and the top post
    async fn stats(&self) -> RepoResult<ForumStats>;
}

//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Post not found: {0}")]
    PostNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid vote type: {0} (expected 'up' or 'down')")]
    InvalidVoteType(String),

    #[error("Invalid sort order: {0} (expected 'recent' or 'top')")]
    InvalidSort(String),

    #[error("Cannot ban yourself")]
    CannotBanSelf,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the owner of this resource")]
    NotResourceOwner,

    #[error("Admin access required")]
    AdminRequired,

    #[error("User is banned")]
    UserBanned,

    #[error("Current password is incorrect")]
    IncorrectPassword,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Concurrent vote on the same post, retry the request")]
    ConcurrentVote,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidVoteType(_) => "INVALID_VOTE_TYPE",
            Self::InvalidSort(_) => "INVALID_SORT",
            Self::CannotBanSelf => "CANNOT_BAN_SELF",

            // Authorization
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",
            Self::AdminRequired => "ADMIN_REQUIRED",
            Self::UserBanned => "USER_BANNED",
            Self::IncorrectPassword => "INCORRECT_PASSWORD",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::ConcurrentVote => "CONCURRENT_VOTE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingField(_)
                | Self::InvalidVoteType(_)
                | Self::InvalidSort(_)
                | Self::CannotBanSelf
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotResourceOwner | Self::AdminRequired | Self::UserBanned | Self::IncorrectPassword
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Storage failures that left no partial state behind and may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ConcurrentVote | Self::DatabaseError(_))
    }
}

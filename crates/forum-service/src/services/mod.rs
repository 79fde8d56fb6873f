//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod access;
pub mod admin;
pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod fields;
pub mod post;
pub mod user;
pub mod vote;

// Re-export all services for convenience
pub use access::AccessService;
pub use admin::AdminService;
pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use post::PostService;
pub use user::UserService;
pub use vote::VoteService;

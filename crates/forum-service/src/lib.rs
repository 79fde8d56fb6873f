//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AccessService, AdminService, AuthService, CommentService, PostService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService, VoteService,
};

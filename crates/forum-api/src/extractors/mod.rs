//! Axum extractors for request handling
//!
//! Custom extractors for the access pipeline, validation, and path/query
//! parameters.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{ActiveUser, AdminUser, AuthUser, OptionalAuthUser};
pub use path::IdPath;
pub use query::ApiQuery;
pub use validated::ValidatedJson;

//! Model to entity mappers
//!
//! `From<Model> for Entity` converts database rows to domain objects.
//! Votes use `TryFrom` since the stored value must be a valid direction.

mod analytics;
mod comment;
mod post;
mod user;
mod vote;

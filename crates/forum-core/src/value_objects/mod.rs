//! Value objects - immutable types that represent domain concepts

mod post_query;
mod vote_direction;
mod vote_tally;

pub use post_query::{PostFilter, PostSort};
pub use vote_direction::VoteDirection;
pub use vote_tally::VoteTally;

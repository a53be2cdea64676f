//! Model to entity mappers
//!
//! Conversions from database rows (models) to domain entities. Most are
//! infallible `From` impls; the vote mapper is a `TryFrom` because a vote row
//! carries invariants the type system cannot see (exactly one target column,
//! value in {-1, 1}).

mod comment;
mod group;
mod post;
mod user;
mod vote;

pub use group::group_with_post_count;

//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod comment;
mod error;
mod group;
mod post;
mod user;
mod vote;

pub use comment::PgCommentRepository;
pub use group::PgGroupRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;

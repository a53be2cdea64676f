//! # forum-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_comment_identifier, generate_post_identifier, slugify, tally, viewer_vote, Comment,
    Group, Post, User, Vote, VoteTarget, VoteValue,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, GroupRepository, GroupWithPostCount, PostRepository, RepoResult,
    UserRepository, VoteRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};

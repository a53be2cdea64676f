//! Ports the infrastructure layer implements

mod repositories;

pub use repositories::{
    CommentRepository, GroupRepository, GroupWithPostCount, PostRepository, RepoResult,
    UserRepository, VoteRepository,
};

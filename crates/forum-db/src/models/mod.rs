//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod group;
mod post;
mod user;
mod vote;

pub use comment::CommentModel;
pub use group::{GroupModel, GroupWithPostCountModel};
pub use post::PostModel;
pub use user::UserModel;
pub use vote::VoteModel;

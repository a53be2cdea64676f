//! Domain entities - core business objects

mod comment;
mod group;
mod post;
mod user;
mod vote;

pub use comment::{generate_comment_identifier, Comment};
pub use group::Group;
pub use post::{generate_post_identifier, slugify, Post};
pub use user::User;
pub use vote::{tally, viewer_vote, Vote, VoteTarget, VoteValue};

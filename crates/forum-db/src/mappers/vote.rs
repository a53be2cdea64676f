//! Vote model -> entity mapper
//!
//! Fallible: a row must reference exactly one target and carry a value of
//! -1 or 1. Anything else means the table constraints were bypassed, which
//! surfaces as a database error rather than a silently wrong score.

use forum_core::entities::{Vote, VoteTarget, VoteValue};
use forum_core::error::DomainError;
use forum_core::value_objects::Snowflake;

use crate::models::VoteModel;

impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        let target = match (model.post_id, model.comment_id) {
            (Some(post_id), None) => VoteTarget::Post(Snowflake::new(post_id)),
            (None, Some(comment_id)) => VoteTarget::Comment(Snowflake::new(comment_id)),
            _ => {
                return Err(DomainError::DatabaseError(
                    "vote row must reference exactly one target".to_string(),
                ))
            }
        };

        let value = VoteValue::from_raw(model.value).ok_or_else(|| {
            DomainError::DatabaseError(format!("vote row has invalid value {}", model.value))
        })?;

        Ok(Vote {
            voter_id: Snowflake::new(model.user_id),
            target,
            value,
            created_at: model.created_at,
        })
    }
}

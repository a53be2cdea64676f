//! Vote service
//!
//! One endpoint does all of it: cast, flip, and retract. A voter holds at
//! most one record per target; the stored record and the wire value decide
//! which mutation happens. Scores are never stored, they are recomputed
//! from the vote records on every read.

use forum_core::entities::{Vote, VoteTarget, VoteValue};
use forum_core::error::DomainError;
use forum_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CastVoteRequest, PostDetailResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::post::load_post_detail;

/// Wire value that asks for an existing record to be removed
const RETRACT: i16 = 0;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Cast, flip, or retract a vote, then return the refreshed post
    ///
    /// The target is the addressed post, or one of its comments when
    /// `comment_identifier` is present. What happens depends on the
    /// stored record and the requested value:
    ///
    /// - no record, value 0: nothing to retract, reported as not found
    /// - no record, value ±1: a record is inserted
    /// - record exists, value 0: the record is deleted
    /// - record exists, different direction: the record is updated
    /// - record exists, same direction: accepted without a write
    ///
    /// The response is the post reloaded with all comments and fresh
    /// annotation, regardless of which branch ran.
    #[instrument(skip(self, request), fields(identifier = %request.identifier))]
    pub async fn cast_vote(
        &self,
        voter_id: Snowflake,
        request: CastVoteRequest,
    ) -> ServiceResult<PostDetailResponse> {
        // Value range is checked before any lookup so a malformed request
        // never touches the store
        let requested = match request.value {
            RETRACT => None,
            raw => Some(
                VoteValue::from_raw(raw).ok_or(DomainError::InvalidVoteValue(raw))?,
            ),
        };

        let post = self
            .ctx
            .post_repo()
            .find_by_handle(&request.identifier, &request.slug)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(request.identifier.clone()))?;

        let target = match &request.comment_identifier {
            Some(comment_identifier) => {
                let comment = self
                    .ctx
                    .comment_repo()
                    .find_by_identifier(comment_identifier)
                    .await?
                    // A comment under a different post is not addressable here
                    .filter(|c| c.post_id == post.id)
                    .ok_or_else(|| DomainError::CommentNotFound(comment_identifier.clone()))?;
                VoteTarget::Comment(comment.id)
            }
            None => VoteTarget::Post(post.id),
        };

        let existing = self.ctx.vote_repo().find(voter_id, target).await?;

        match (existing, requested) {
            (None, None) => return Err(DomainError::VoteNotFound.into()),
            (None, Some(value)) => {
                self.ctx
                    .vote_repo()
                    .create(&Vote::new(voter_id, target, value))
                    .await?;
                info!(voter_id = %voter_id, value = value.as_i16(), "Vote recorded");
            }
            (Some(_), None) => {
                self.ctx.vote_repo().delete(voter_id, target).await?;
                info!(voter_id = %voter_id, "Vote retracted");
            }
            (Some(existing), Some(value)) if existing.value != value => {
                self.ctx
                    .vote_repo()
                    .update_value(voter_id, target, value)
                    .await?;
                info!(voter_id = %voter_id, value = value.as_i16(), "Vote flipped");
            }
            // Same direction again: accepted, nothing to write
            (Some(_), Some(_)) => {}
        }

        load_post_detail(self.ctx, post, Some(voter_id)).await
    }
}

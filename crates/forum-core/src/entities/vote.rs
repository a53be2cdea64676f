//! Vote entity and score arithmetic
//!
//! A vote is a single up/down mark a user places on a post or a comment,
//! unique per `(voter, target)`. Scores are never stored; they are recomputed
//! from loaded vote sets by the pure functions in this module.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// What a vote is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteTarget {
    Post(Snowflake),
    Comment(Snowflake),
}

impl VoteTarget {
    /// The id of the targeted entity
    #[inline]
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Post(id) | Self::Comment(id) => *id,
        }
    }

    /// Check if this targets a post
    #[inline]
    pub fn is_post(&self) -> bool {
        matches!(self, Self::Post(_))
    }
}

/// Direction of a stored vote
///
/// Only `-1` and `+1` are ever stored. The wire value `0` is a retraction
/// sentinel handled before a `VoteValue` is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i16)]
pub enum VoteValue {
    Down = -1,
    Up = 1,
}

impl VoteValue {
    /// Convert a raw wire value into a vote direction
    ///
    /// Returns `None` for anything other than `-1` or `1`; `0` must be
    /// translated to a retraction by the caller.
    pub fn from_raw(raw: i16) -> Option<Self> {
        match raw {
            -1 => Some(Self::Down),
            1 => Some(Self::Up),
            _ => None,
        }
    }

    /// Raw numeric value
    #[inline]
    pub const fn as_i16(self) -> i16 {
        self as i16
    }
}

/// A single vote record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub voter_id: Snowflake,
    pub target: VoteTarget,
    pub value: VoteValue,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Create a new Vote
    pub fn new(voter_id: Snowflake, target: VoteTarget, value: VoteValue) -> Self {
        Self {
            voter_id,
            target,
            value,
            created_at: Utc::now(),
        }
    }
}

/// Sum a loaded vote set into an aggregate score
///
/// The empty set scores 0.
pub fn tally(votes: &[Vote]) -> i64 {
    votes.iter().map(|v| i64::from(v.value.as_i16())).sum()
}

/// The viewer's own vote within a loaded vote set
///
/// Returns 0 when the viewer has no record. Callers handle the unauthenticated
/// case by never calling this.
pub fn viewer_vote(votes: &[Vote], viewer_id: Snowflake) -> i16 {
    votes
        .iter()
        .find(|v| v.voter_id == viewer_id)
        .map_or(0, |v| v.value.as_i16())
}

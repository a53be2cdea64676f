//! Error handling utilities for repositories

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "post not found" error from any displayable handle
pub fn post_not_found(handle: impl std::fmt::Display) -> DomainError {
    DomainError::PostNotFound(handle.to_string())
}

/// Create a "comment not found" error
pub fn comment_not_found(handle: impl std::fmt::Display) -> DomainError {
    DomainError::CommentNotFound(handle.to_string())
}

/// Create a "group not found" error
pub fn group_not_found(name: &str) -> DomainError {
    DomainError::GroupNotFound(name.to_string())
}

//! # forum-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → Entity mappers
//! - Repository implementations
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE users (
//!     id            BIGINT PRIMARY KEY,
//!     username      TEXT NOT NULL UNIQUE,
//!     email         TEXT NOT NULL UNIQUE,
//!     password_hash TEXT NOT NULL,
//!     created_at    TIMESTAMPTZ NOT NULL,
//!     updated_at    TIMESTAMPTZ NOT NULL
//! );
//!
//! CREATE TABLE groups (
//!     id          BIGINT PRIMARY KEY,
//!     name        TEXT NOT NULL UNIQUE,
//!     title       TEXT NOT NULL,
//!     description TEXT,
//!     username    TEXT NOT NULL REFERENCES users(username),
//!     created_at  TIMESTAMPTZ NOT NULL,
//!     updated_at  TIMESTAMPTZ NOT NULL
//! );
//!
//! CREATE TABLE posts (
//!     id         BIGINT PRIMARY KEY,
//!     identifier TEXT NOT NULL,
//!     slug       TEXT NOT NULL,
//!     title      TEXT NOT NULL,
//!     body       TEXT,
//!     group_name TEXT NOT NULL REFERENCES groups(name) ON DELETE CASCADE,
//!     username   TEXT NOT NULL REFERENCES users(username),
//!     created_at TIMESTAMPTZ NOT NULL,
//!     updated_at TIMESTAMPTZ NOT NULL,
//!     UNIQUE (identifier, slug)
//! );
//!
//! CREATE TABLE comments (
//!     id         BIGINT PRIMARY KEY,
//!     identifier TEXT NOT NULL UNIQUE,
//!     body       TEXT NOT NULL,
//!     post_id    BIGINT NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
//!     username   TEXT NOT NULL REFERENCES users(username),
//!     created_at TIMESTAMPTZ NOT NULL,
//!     updated_at TIMESTAMPTZ NOT NULL
//! );
//!
//! CREATE TABLE votes (
//!     user_id    BIGINT NOT NULL REFERENCES users(id),
//!     post_id    BIGINT REFERENCES posts(id) ON DELETE CASCADE,
//!     comment_id BIGINT REFERENCES comments(id) ON DELETE CASCADE,
//!     value      SMALLINT NOT NULL CHECK (value IN (-1, 1)),
//!     created_at TIMESTAMPTZ NOT NULL,
//!     CHECK ((post_id IS NULL) <> (comment_id IS NULL)),
//!     UNIQUE (user_id, post_id),
//!     UNIQUE (user_id, comment_id)
//! );
//! ```
//!
//! The two unique constraints are what make concurrent first votes safe: the
//! losing insert surfaces as a retryable conflict instead of a duplicate row.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgCommentRepository, PgGroupRepository, PgPostRepository, PgUserRepository, PgVoteRepository,
};

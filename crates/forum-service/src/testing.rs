//! In-memory repository implementations for service tests
//!
//! One shared `Store` backs all five repositories so a test harness can
//! exercise the full service layer without a database. The vote store
//! mirrors the production uniqueness rules: inserting a second record for
//! the same voter and target is a conflict, and updating or deleting a
//! missing record reports it as not found.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use forum_common::auth::JwtService;
use forum_core::entities::{Comment, Group, Post, User, Vote, VoteTarget, VoteValue};
use forum_core::error::DomainError;
use forum_core::traits::{
    CommentRepository, GroupRepository, GroupWithPostCount, PostRepository, RepoResult,
    UserRepository, VoteRepository,
};
use forum_core::{Snowflake, SnowflakeGenerator};

use crate::services::ServiceContext;

/// Shared backing storage for the in-memory repositories
#[derive(Default)]
pub struct Store {
    users: Mutex<Vec<(User, String)>>,
    groups: Mutex<Vec<Group>>,
    posts: Mutex<Vec<Post>>,
    comments: Mutex<Vec<Comment>>,
    votes: Mutex<Vec<Vote>>,
}

fn newest_first<T, F: Fn(&T) -> chrono::DateTime<chrono::Utc>>(mut items: Vec<T>, key: F) -> Vec<T> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

// ============================================================================
// Users
// ============================================================================

pub struct InMemoryUserRepository(Arc<Store>);

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.find_by_username(username).await?.is_some())
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.0.users.lock().unwrap();
        if users.iter().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == id)
            .map(|(_, h)| h.clone()))
    }
}

// ============================================================================
// Groups
// ============================================================================

pub struct InMemoryGroupRepository(Arc<Store>);

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Group>> {
        Ok(self
            .0
            .groups
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.name == name)
            .cloned())
    }

    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        Ok(self.find_by_name(name).await?.is_some())
    }

    async fn create(&self, group: &Group) -> RepoResult<()> {
        let mut groups = self.0.groups.lock().unwrap();
        if groups.iter().any(|g| g.name == group.name) {
            return Err(DomainError::GroupNameExists);
        }
        groups.push(group.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> RepoResult<()> {
        let mut groups = self.0.groups.lock().unwrap();
        let before = groups.len();
        groups.retain(|g| g.name != name);
        if groups.len() == before {
            return Err(DomainError::GroupNotFound(name.to_string()));
        }
        Ok(())
    }

    async fn top_by_post_count(&self, limit: i64) -> RepoResult<Vec<GroupWithPostCount>> {
        let groups = self.0.groups.lock().unwrap().clone();
        let posts = self.0.posts.lock().unwrap();

        let mut ranked: Vec<GroupWithPostCount> = groups
            .into_iter()
            .map(|group| {
                let post_count =
                    posts.iter().filter(|p| p.group_name == group.name).count() as i64;
                GroupWithPostCount { group, post_count }
            })
            .collect();
        ranked.sort_by(|a, b| b.post_count.cmp(&a.post_count));
        ranked.truncate(usize::try_from(limit.max(0)).unwrap_or(0));
        Ok(ranked)
    }
}

// ============================================================================
// Posts
// ============================================================================

pub struct InMemoryPostRepository(Arc<Store>);

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self
            .0
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_handle(&self, identifier: &str, slug: &str) -> RepoResult<Option<Post>> {
        Ok(self
            .0
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.identifier == identifier && p.slug == slug)
            .cloned())
    }

    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Post>> {
        Ok(self
            .0
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.identifier == identifier)
            .cloned())
    }

    async fn find_recent(&self, offset: i64, limit: i64) -> RepoResult<Vec<Post>> {
        let posts = newest_first(self.0.posts.lock().unwrap().clone(), |p| p.created_at);
        Ok(posts
            .into_iter()
            .skip(usize::try_from(offset.max(0)).unwrap_or(0))
            .take(usize::try_from(limit.max(0)).unwrap_or(0))
            .collect())
    }

    async fn find_by_group(&self, group_name: &str) -> RepoResult<Vec<Post>> {
        let posts = self.0.posts.lock().unwrap().clone();
        Ok(newest_first(
            posts.into_iter().filter(|p| p.group_name == group_name).collect(),
            |p| p.created_at,
        ))
    }

    async fn find_by_author(&self, username: &str) -> RepoResult<Vec<Post>> {
        let posts = self.0.posts.lock().unwrap().clone();
        Ok(newest_first(
            posts.into_iter().filter(|p| p.username == username).collect(),
            |p| p.created_at,
        ))
    }

    async fn search_by_title(&self, term: &str) -> RepoResult<Vec<Post>> {
        let term = term.to_lowercase();
        let posts = self.0.posts.lock().unwrap().clone();
        Ok(newest_first(
            posts
                .into_iter()
                .filter(|p| p.title.to_lowercase().starts_with(&term))
                .collect(),
            |p| p.created_at,
        ))
    }

    async fn comment_count(&self, post_id: Snowflake) -> RepoResult<i64> {
        Ok(self
            .0
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .count() as i64)
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.0.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut posts = self.0.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(DomainError::PostNotFound(id.to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Comments
// ============================================================================

pub struct InMemoryCommentRepository(Arc<Store>);

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<Comment>> {
        Ok(self
            .0
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.identifier == identifier)
            .cloned())
    }

    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let comments = self.0.comments.lock().unwrap().clone();
        Ok(newest_first(
            comments.into_iter().filter(|c| c.post_id == post_id).collect(),
            |c| c.created_at,
        ))
    }

    async fn find_by_author(&self, username: &str) -> RepoResult<Vec<Comment>> {
        let comments = self.0.comments.lock().unwrap().clone();
        Ok(newest_first(
            comments.into_iter().filter(|c| c.username == username).collect(),
            |c| c.created_at,
        ))
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.0.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut comments = self.0.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(DomainError::CommentNotFound(id.to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Votes
// ============================================================================

pub struct InMemoryVoteRepository(Arc<Store>);

#[async_trait]
impl VoteRepository for InMemoryVoteRepository {
    async fn find(&self, voter_id: Snowflake, target: VoteTarget) -> RepoResult<Option<Vote>> {
        Ok(self
            .0
            .votes
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.voter_id == voter_id && v.target == target)
            .cloned())
    }

    async fn find_for_target(&self, target: VoteTarget) -> RepoResult<Vec<Vote>> {
        Ok(self
            .0
            .votes
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.target == target)
            .cloned()
            .collect())
    }

    async fn create(&self, vote: &Vote) -> RepoResult<()> {
        let mut votes = self.0.votes.lock().unwrap();
        if votes
            .iter()
            .any(|v| v.voter_id == vote.voter_id && v.target == vote.target)
        {
            return Err(DomainError::VoteConflict(vote.voter_id));
        }
        votes.push(vote.clone());
        Ok(())
    }

    async fn update_value(
        &self,
        voter_id: Snowflake,
        target: VoteTarget,
        value: VoteValue,
    ) -> RepoResult<()> {
        let mut votes = self.0.votes.lock().unwrap();
        let vote = votes
            .iter_mut()
            .find(|v| v.voter_id == voter_id && v.target == target)
            .ok_or(DomainError::VoteNotFound)?;
        vote.value = value;
        Ok(())
    }

    async fn delete(&self, voter_id: Snowflake, target: VoteTarget) -> RepoResult<()> {
        let mut votes = self.0.votes.lock().unwrap();
        let before = votes.len();
        votes.retain(|v| !(v.voter_id == voter_id && v.target == target));
        if votes.len() == before {
            return Err(DomainError::VoteNotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Harness
// ============================================================================

/// A service context wired to in-memory repositories, plus seeding helpers
pub struct TestHarness {
    store: Arc<Store>,
    ctx: ServiceContext,
}

impl TestHarness {
    pub fn new() -> Self {
        let store = Arc::new(Store::default());
        let ctx = ServiceContext::new(
            Arc::new(InMemoryUserRepository(store.clone())),
            Arc::new(InMemoryGroupRepository(store.clone())),
            Arc::new(InMemoryPostRepository(store.clone())),
            Arc::new(InMemoryCommentRepository(store.clone())),
            Arc::new(InMemoryVoteRepository(store.clone())),
            Arc::new(JwtService::new(
                "test-secret-for-service-tests-0123456789",
                900,
                604_800,
            )),
            Arc::new(SnowflakeGenerator::new(1)),
        );
        Self { store, ctx }
    }

    pub fn ctx(&self) -> &ServiceContext {
        &self.ctx
    }

    pub fn seed_user(&self, username: &str) -> User {
        let user = User::new(
            self.ctx.generate_id(),
            username.to_string(),
            format!("{username}@example.com"),
        );
        self.store
            .users
            .lock()
            .unwrap()
            .push((user.clone(), "seeded-hash".to_string()));
        user
    }

    /// Create a post (and its author and group if missing)
    pub fn seed_post(&self, author: &str, title: &str) -> Post {
        if self.store.users.lock().unwrap().iter().all(|(u, _)| u.username != author) {
            self.seed_user(author);
        }
        if self.store.groups.lock().unwrap().is_empty() {
            let group = Group::new(
                self.ctx.generate_id(),
                "general".to_string(),
                "General".to_string(),
                author.to_string(),
            );
            self.store.groups.lock().unwrap().push(group);
        }
        let post = Post::new(
            self.ctx.generate_id(),
            title.to_string(),
            None,
            "general".to_string(),
            author.to_string(),
        );
        self.store.posts.lock().unwrap().push(post.clone());
        post
    }

    pub fn seed_comment(&self, post: &Post, author: &str, body: &str) -> Comment {
        let comment = Comment::new(
            self.ctx.generate_id(),
            body.to_string(),
            post.id,
            author.to_string(),
        );
        self.store.comments.lock().unwrap().push(comment.clone());
        comment
    }

    pub fn vote_count(&self) -> usize {
        self.store.votes.lock().unwrap().len()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

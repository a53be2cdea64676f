//! Group service
//!
//! Handles group creation, activity ranking, detail lookup, and deletion.

use forum_core::entities::Group;
use forum_core::error::DomainError;
use forum_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateGroupRequest, GroupDetailResponse, GroupResponse, TopGroupResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::post::{annotate_posts, resolve_user};

/// How many groups the activity ranking returns
const TOP_GROUP_LIMIT: i64 = 5;

/// Group service
pub struct GroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GroupService<'a> {
    /// Create a new GroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new group owned by the caller
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_group(
        &self,
        owner_id: Snowflake,
        request: CreateGroupRequest,
    ) -> ServiceResult<GroupResponse> {
        let owner = resolve_user(self.ctx, owner_id).await?;

        if self.ctx.group_repo().name_exists(&request.name).await? {
            return Err(DomainError::GroupNameExists.into());
        }

        let group = Group::new(
            self.ctx.generate_id(),
            request.name,
            request.title,
            owner.username,
        )
        .with_description(request.description);

        self.ctx.group_repo().create(&group).await?;

        info!(group_id = %group.id, name = %group.name, "Group created");

        Ok(GroupResponse::from(group))
    }

    /// Most active groups, ranked by post count
    #[instrument(skip(self))]
    pub async fn top_groups(&self) -> ServiceResult<Vec<TopGroupResponse>> {
        let ranked = self
            .ctx
            .group_repo()
            .top_by_post_count(TOP_GROUP_LIMIT)
            .await?;

        Ok(ranked.into_iter().map(TopGroupResponse::from).collect())
    }

    /// A group with its posts annotated for the viewer
    #[instrument(skip(self))]
    pub async fn get_group(
        &self,
        name: &str,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<GroupDetailResponse> {
        let group = self
            .ctx
            .group_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::GroupNotFound(name.to_string()))?;

        let posts = self.ctx.post_repo().find_by_group(&group.name).await?;
        let posts = annotate_posts(self.ctx, posts, viewer).await?;

        Ok(GroupDetailResponse {
            name: group.name,
            title: group.title,
            description: group.description,
            username: group.username,
            created_at: group.created_at,
            posts,
        })
    }

    /// Delete a group; only its owner may do this
    #[instrument(skip(self))]
    pub async fn delete_group(&self, user_id: Snowflake, name: &str) -> ServiceResult<()> {
        let user = resolve_user(self.ctx, user_id).await?;

        let group = self
            .ctx
            .group_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::GroupNotFound(name.to_string()))?;

        if !group.is_owner(&user.username) {
            return Err(DomainError::NotGroupOwner.into());
        }

        self.ctx.group_repo().delete(&group.name).await?;

        info!(name = %group.name, "Group deleted");

        Ok(())
    }
}

//! Group model -> entity mapper

use forum_core::entities::Group;
use forum_core::traits::GroupWithPostCount;
use forum_core::value_objects::Snowflake;

use crate::models::{GroupModel, GroupWithPostCountModel};

impl From<GroupModel> for Group {
    fn from(model: GroupModel) -> Self {
        Group {
            id: Snowflake::new(model.id),
            name: model.name,
            title: model.title,
            description: model.description,
            username: model.username,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert a joined row into a group + post count pair
pub fn group_with_post_count(model: GroupWithPostCountModel) -> GroupWithPostCount {
    GroupWithPostCount {
        group: Group {
            id: Snowflake::new(model.id),
            name: model.name,
            title: model.title,
            description: model.description,
            username: model.username,
            created_at: model.created_at,
            updated_at: model.updated_at,
        },
        post_count: model.post_count,
    }
}

//! Post model -> entity mapper

use forum_core::entities::Post;
use forum_core::value_objects::Snowflake;

use crate::models::PostModel;

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: Snowflake::new(model.id),
            identifier: model.identifier,
            slug: model.slug,
            title: model.title,
            body: model.body,
            group_name: model.group_name,
            username: model.username,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

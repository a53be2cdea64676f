//! Comment model -> entity mapper

use forum_core::entities::Comment;
use forum_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            identifier: model.identifier,
            body: model.body,
            post_id: Snowflake::new(model.post_id),
            username: model.username,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

//! Post model -> entity mappers

use postboard_core::entities::{Post, PostView};

use crate::models::{PostModel, PostViewModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<PostViewModel> for PostView {
    fn from(model: PostViewModel) -> Self {
        PostView {
            id: model.id,
            content: model.content,
            created_at: model.created_at,
            username: model.username,
            is_author: model.is_author,
            likes: model.likes,
            liked: model.liked,
        }
    }
}

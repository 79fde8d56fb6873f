//! Comment model -> entity mappers

use forum_core::entities::{Comment, CommentWithAuthor};

use crate::models::{CommentModel, CommentWithAuthorModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            content: model.content,
            author_id: model.author_id,
            post_id: model.post_id,
            created_at: model.created_at,
        }
    }
}

impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        CommentWithAuthor {
            comment: Comment {
                id: model.id,
                content: model.content,
                author_id: model.author_id,
                post_id: model.post_id,
                created_at: model.created_at,
            },
            author_name: model.author_name,
        }
    }
}

//! Post model -> entity mappers

use forum_core::entities::{Post, PostSummary};
use forum_core::value_objects::VoteTally;

use crate::models::{PostModel, PostSummaryModel};

impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            title: model.title,
            content: model.content,
            link: model.link,
            author_id: model.author_id,
            created_at: model.created_at,
        }
    }
}

/// Comments are attached afterwards by the repository
impl From<PostSummaryModel> for PostSummary {
    fn from(model: PostSummaryModel) -> Self {
        PostSummary {
            post: Post {
                id: model.id,
                title: model.title,
                content: model.content,
                link: model.link,
                author_id: model.author_id,
                created_at: model.created_at,
            },
            author_name: model.author_name,
            tally: VoteTally::new(model.upvotes, model.downvotes),
            comment_count: model.comment_count,
            comments: Vec::new(),
        }
    }
}

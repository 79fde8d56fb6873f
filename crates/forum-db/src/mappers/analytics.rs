//! Analytics rows -> entity

use forum_core::entities::{ForumStats, TopPost};

use crate::models::{ForumStatsModel, TopPostModel};

impl From<TopPostModel> for TopPost {
    fn from(model: TopPostModel) -> Self {
        TopPost {
            id: model.id,
            title: model.title,
            score: model.score,
            upvotes: model.upvotes,
            comment_count: model.comment_count,
        }
    }
}

/// Top post is filled in by the repository from a separate query
impl From<ForumStatsModel> for ForumStats {
    fn from(model: ForumStatsModel) -> Self {
        ForumStats {
            total_users: model.total_users,
            banned_users: model.banned_users,
            active_admins: model.active_admins,
            total_posts: model.total_posts,
            total_comments: model.total_comments,
            total_votes: model.total_votes,
            top_post: None,
        }
    }
}

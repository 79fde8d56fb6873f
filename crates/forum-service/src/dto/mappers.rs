//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use forum_core::entities::{CommentWithAuthor, ForumStats, PostSummary, TopPost, User};

use super::responses::{
    AnalyticsResponse, AuthorResponse, CommentResponse, CurrentUserResponse, PostResponse,
    TopPostResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            is_banned: user.is_banned,
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

impl From<CommentWithAuthor> for CommentResponse {
    fn from(entry: CommentWithAuthor) -> Self {
        let comment = entry.comment;
        Self {
            id: comment.id,
            content: comment.content,
            created_at: comment.created_at,
            post_id: comment.post_id,
            author: AuthorResponse {
                id: comment.author_id,
                name: entry.author_name,
            },
        }
    }
}

impl From<PostSummary> for PostResponse {
    fn from(summary: PostSummary) -> Self {
        let score = summary.score();
        let PostSummary {
            post,
            author_name,
            tally,
            comment_count,
            comments,
        } = summary;

        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            link: post.link,
            created_at: post.created_at,
            author: AuthorResponse {
                id: post.author_id,
                name: author_name,
            },
            score,
            upvotes: tally.upvotes,
            downvotes: tally.downvotes,
            comment_count,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

// ============================================================================
// Admin Mappers
// ============================================================================

impl From<TopPost> for TopPostResponse {
    fn from(post: TopPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            score: post.score,
            upvotes: post.upvotes,
            comments: post.comment_count,
        }
    }
}

impl From<ForumStats> for AnalyticsResponse {
    fn from(stats: ForumStats) -> Self {
        Self {
            total_users: stats.total_users,
            banned_users: stats.banned_users,
            active_admins: stats.active_admins,
            total_posts: stats.total_posts,
            total_comments: stats.total_comments,
            total_votes: stats.total_votes,
            top_post: stats.top_post.map(TopPostResponse::from),
        }
    }
}

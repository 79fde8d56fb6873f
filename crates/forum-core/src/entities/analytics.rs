//! Site-wide counters for the admin dashboard

/// Highest scoring post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPost {
    pub id: i64,
    pub title: String,
    pub score: i64,
    pub upvotes: i64,
    pub comment_count: i64,
}

/// Snapshot of forum totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForumStats {
    pub total_users: i64,
    pub banned_users: i64,
    pub active_admins: i64,
    pub total_posts: i64,
    pub total_comments: i64,
    pub total_votes: i64,
    pub top_post: Option<TopPost>,
}

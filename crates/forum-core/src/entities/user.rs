//! User entity - represents a forum account

use chrono::{DateTime, Utc};

/// User account. The password hash is kept out of the entity and only read
/// by the credential checks that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if user holds the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Check if user is banned
    #[inline]
    pub fn is_banned(&self) -> bool {
        self.is_banned
    }

    /// Whether this user may edit or delete a resource owned by `owner_id`
    pub fn can_manage(&self, owner_id: i64) -> bool {
        self.id == owner_id || self.is_admin
    }
}

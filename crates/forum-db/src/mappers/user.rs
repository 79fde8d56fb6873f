//! User model -> entity mapper

use forum_core::entities::User;

use crate::models::UserModel;

/// The password hash stays behind in the model
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            is_admin: model.is_admin,
            is_banned: model.is_banned,
            created_at: model.created_at,
        }
    }
}

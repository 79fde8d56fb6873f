//! Vote model -> entity mappers

use forum_core::entities::Vote;
use forum_core::error::DomainError;
use forum_core::value_objects::{VoteDirection, VoteTally};

use crate::models::{VoteModel, VoteTallyModel};

impl TryFrom<VoteModel> for Vote {
    type Error = DomainError;

    fn try_from(model: VoteModel) -> Result<Self, Self::Error> {
        let direction = VoteDirection::from_value(model.value).ok_or_else(|| {
            DomainError::DatabaseError(format!(
                "vote {} has out-of-range value {}",
                model.id, model.value
            ))
        })?;

        Ok(Vote {
            id: model.id,
            user_id: model.user_id,
            post_id: model.post_id,
            direction,
            created_at: model.created_at,
        })
    }
}

impl From<VoteTallyModel> for VoteTally {
    fn from(model: VoteTallyModel) -> Self {
        VoteTally::new(model.upvotes, model.downvotes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn model(value: i16) -> VoteModel {
        VoteModel {
            id: 9,
            value,
            created_at: Utc::now(),
            user_id: 1,
            post_id: 2,
        }
    }

    #[test]
    fn test_signed_value_maps_to_direction() {
        assert_eq!(Vote::try_from(model(1)).unwrap().direction, VoteDirection::Up);
        assert_eq!(Vote::try_from(model(-1)).unwrap().direction, VoteDirection::Down);
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        let err = Vote::try_from(model(0)).unwrap_err();
        assert!(err.is_transient());
    }
}

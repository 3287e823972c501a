//! Join request domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::study_user::StudyUserDto;

/// A user's request to join a study. Accepted requests count as members.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyUser {
    pub study_id: Uuid,
    pub user_id: Uuid,
    pub is_accepted: bool,
    /// Short introduction shown to the host
    pub temp_bio: String,
    pub created_at: DateTime<Utc>,
}

impl StudyUser {
    pub fn from_entity(entity: entity::study_user::Model) -> Self {
        Self {
            study_id: entity.study_id,
            user_id: entity.user_id,
            is_accepted: entity.is_accepted,
            temp_bio: entity.temp_bio,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> StudyUserDto {
        StudyUserDto {
            study_id: self.study_id,
            user_id: self.user_id,
            is_accepted: self.is_accepted,
            temp_bio: self.temp_bio,
            created_at: self.created_at,
        }
    }
}

/// Host decision on a pending request.
#[derive(Debug, Clone)]
pub struct AcceptStudyUserParams {
    pub study_id: Uuid,
    pub host_id: Uuid,
    pub user_id: Uuid,
    pub accept: bool,
}

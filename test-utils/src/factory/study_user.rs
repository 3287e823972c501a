//! Join request factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct StudyUserFactory<'a> {
    db: &'a DatabaseConnection,
    study_id: Uuid,
    user_id: Uuid,
    is_accepted: bool,
    temp_bio: String,
}

impl<'a> StudyUserFactory<'a> {
    /// Creates a pending join request with a short introduction.
    pub fn new(db: &'a DatabaseConnection, study_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            study_id,
            user_id,
            is_accepted: false,
            temp_bio: "I would like to join.".to_string(),
        }
    }

    pub fn accepted(mut self, is_accepted: bool) -> Self {
        self.is_accepted = is_accepted;
        self
    }

    pub fn temp_bio(mut self, temp_bio: impl Into<String>) -> Self {
        self.temp_bio = temp_bio.into();
        self
    }

    pub async fn build(self) -> Result<entity::study_user::Model, DbErr> {
        entity::study_user::ActiveModel {
            study_id: ActiveValue::Set(self.study_id),
            user_id: ActiveValue::Set(self.user_id),
            is_accepted: ActiveValue::Set(self.is_accepted),
            temp_bio: ActiveValue::Set(self.temp_bio),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending join request.
pub async fn create_study_user(
    db: &DatabaseConnection,
    study_id: Uuid,
    user_id: Uuid,
) -> Result<entity::study_user::Model, DbErr> {
    StudyUserFactory::new(db, study_id, user_id).build().await
}

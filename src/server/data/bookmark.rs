//! Bookmark repository.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct BookmarkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookmarkRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, study_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let entity = entity::prelude::Bookmark::find_by_id((study_id, user_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    pub async fn create(&self, study_id: Uuid, user_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Bookmark::insert(entity::bookmark::ActiveModel {
            study_id: ActiveValue::Set(study_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn get_study_ids_by_user(&self, user_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        let entities = entity::prelude::Bookmark::find()
            .filter(entity::bookmark::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|entity| entity.study_id).collect())
    }

    /// # Returns
    /// - `Ok(1)` - Bookmark removed
    /// - `Ok(0)` - The user had not bookmarked the study
    pub async fn delete(&self, study_id: Uuid, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Bookmark::delete_by_id((study_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

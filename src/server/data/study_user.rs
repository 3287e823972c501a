//! Join request repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::study_user::StudyUser;

pub struct StudyUserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudyUserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a pending join request.
    ///
    /// # Returns
    /// - `Ok(StudyUser)` - The created request
    /// - `Err(DbErr)` - Database error, including a duplicate (study, user) pair
    pub async fn create(
        &self,
        study_id: Uuid,
        user_id: Uuid,
        temp_bio: String,
    ) -> Result<StudyUser, DbErr> {
        let entity = entity::prelude::StudyUser::insert(entity::study_user::ActiveModel {
            study_id: ActiveValue::Set(study_id),
            user_id: ActiveValue::Set(user_id),
            is_accepted: ActiveValue::Set(false),
            temp_bio: ActiveValue::Set(temp_bio),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(StudyUser::from_entity(entity))
    }

    pub async fn find(&self, study_id: Uuid, user_id: Uuid) -> Result<Option<StudyUser>, DbErr> {
        let entity = entity::prelude::StudyUser::find_by_id((study_id, user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(StudyUser::from_entity))
    }

    /// Lists requests for a study in the order they were made.
    ///
    /// # Arguments
    /// - `study_id` - Study to list requests for
    /// - `accepted_only` - Restrict to accepted members
    pub async fn get_by_study(
        &self,
        study_id: Uuid,
        accepted_only: bool,
    ) -> Result<Vec<StudyUser>, DbErr> {
        let mut query = entity::prelude::StudyUser::find()
            .filter(entity::study_user::Column::StudyId.eq(study_id));

        if accepted_only {
            query = query.filter(entity::study_user::Column::IsAccepted.eq(true));
        }

        let entities = query
            .order_by_asc(entity::study_user::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StudyUser::from_entity).collect())
    }

    /// Lists the studies where the user holds an accepted seat.
    pub async fn get_accepted_study_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DbErr> {
        let entities = entity::prelude::StudyUser::find()
            .filter(entity::study_user::Column::UserId.eq(user_id))
            .filter(entity::study_user::Column::IsAccepted.eq(true))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|entity| entity.study_id).collect())
    }

    /// Replaces the applicant's introduction.
    ///
    /// # Returns
    /// - `Ok(1)` - Introduction updated
    /// - `Ok(0)` - No such request
    pub async fn update_temp_bio(
        &self,
        study_id: Uuid,
        user_id: Uuid,
        temp_bio: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::StudyUser::update_many()
            .filter(entity::study_user::Column::StudyId.eq(study_id))
            .filter(entity::study_user::Column::UserId.eq(user_id))
            .col_expr(entity::study_user::Column::TempBio, Expr::value(temp_bio))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_accepted(
        &self,
        study_id: Uuid,
        user_id: Uuid,
        is_accepted: bool,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::StudyUser::update_many()
            .filter(entity::study_user::Column::StudyId.eq(study_id))
            .filter(entity::study_user::Column::UserId.eq(user_id))
            .col_expr(entity::study_user::Column::IsAccepted, Expr::value(is_accepted))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, study_id: Uuid, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::StudyUser::delete_by_id((study_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

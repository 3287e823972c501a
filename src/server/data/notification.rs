//! Notification repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::model::notification::{CreateNotificationParams, Notification};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::prelude::Notification::insert(entity::notification::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            user_id: ActiveValue::Set(params.user_id),
            study_id: ActiveValue::Set(Some(params.study_id)),
            kind: ActiveValue::Set(params.kind),
            title: ActiveValue::Set(params.title),
            about: ActiveValue::Set(params.about),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Lists a user's notifications, newest first.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks a notification read if it belongs to the user.
    ///
    /// # Returns
    /// - `Ok(1)` - Notification marked read
    /// - `Ok(0)` - Unknown id or someone else's notification
    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(id))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

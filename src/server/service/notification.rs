use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::notification::NotificationRepository, error::AppError,
    model::notification::Notification,
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_by_user(user_id)
            .await?)
    }

    /// Marks one of the caller's notifications read.
    ///
    /// Someone else's notification is reported as missing.
    pub async fn mark_read(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        if NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
            == 0
        {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }
}

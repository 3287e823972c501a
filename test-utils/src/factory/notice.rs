//! Notice factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct NoticeFactory<'a> {
    db: &'a DatabaseConnection,
    host_id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
}

impl<'a> NoticeFactory<'a> {
    /// Creates a notice authored by `host_id` titled `"Notice {n}"`.
    pub fn new(db: &'a DatabaseConnection, host_id: Uuid) -> Self {
        Self {
            db,
            host_id,
            title: format!("Notice {}", next_id()),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::notice::Model, DbErr> {
        entity::notice::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            about: ActiveValue::Set("Service announcement".to_string()),
            host_id: ActiveValue::Set(self.host_id),
            views: ActiveValue::Set(0),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notice with default values.
pub async fn create_notice(
    db: &DatabaseConnection,
    host_id: Uuid,
) -> Result<entity::notice::Model, DbErr> {
    NoticeFactory::new(db, host_id).build().await
}

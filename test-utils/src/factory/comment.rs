//! Comment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for comments and replies.
///
/// # Example
///
/// ```rust,ignore
/// let parent = create_comment(&db, study.id, author.id).await?;
/// let reply = CommentFactory::new(&db, study.id, other.id)
///     .parent(parent.id)
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    study_id: Uuid,
    user_id: Uuid,
    parent_id: Option<Uuid>,
    content: String,
}

impl<'a> CommentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, study_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            study_id,
            user_id,
            parent_id: None,
            content: "When do we meet?".to_string(),
        }
    }

    pub fn parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            study_id: ActiveValue::Set(self.study_id),
            user_id: ActiveValue::Set(Some(self.user_id)),
            parent_id: ActiveValue::Set(self.parent_id),
            content: ActiveValue::Set(self.content),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top level comment.
pub async fn create_comment(
    db: &DatabaseConnection,
    study_id: Uuid,
    user_id: Uuid,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, study_id, user_id).build().await
}

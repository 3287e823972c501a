use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{comment::CommentRepository, metoo::MetooRepository, study::StudyRepository},
    error::AppError,
    model::comment::Comment,
};

pub struct MetooService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MetooService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Flags interest in someone else's comment.
    ///
    /// # Returns
    /// - `Ok(())` - Flag stored
    /// - `Err(AppError::NotFound)` - No such study, or no such comment on it
    /// - `Err(AppError::BadRequest)` - Own comment, or already flagged
    pub async fn add(&self, study_id: Uuid, comment_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let comment = self.get_comment(study_id, comment_id).await?;

        if comment.is_author(user_id) {
            return Err(AppError::BadRequest(
                "Cannot flag your own comment".to_string(),
            ));
        }

        let repo = MetooRepository::new(self.db);
        if repo.exists(comment.id, user_id).await? {
            return Err(AppError::BadRequest("Comment already flagged".to_string()));
        }

        repo.create(comment.id, user_id).await?;

        Ok(())
    }

    /// Removes the caller's flag.
    ///
    /// # Returns
    /// - `Ok(())` - Flag removed
    /// - `Err(AppError::NotFound)` - No such study, comment, or flag
    pub async fn remove(
        &self,
        study_id: Uuid,
        comment_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        let comment = self.get_comment(study_id, comment_id).await?;

        if MetooRepository::new(self.db)
            .delete(comment.id, user_id)
            .await?
            == 0
        {
            return Err(AppError::NotFound("Flag not found".to_string()));
        }

        Ok(())
    }

    async fn get_comment(&self, study_id: Uuid, comment_id: Uuid) -> Result<Comment, AppError> {
        if StudyRepository::new(self.db)
            .find_by_id(study_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Study not found".to_string()));
        }

        CommentRepository::new(self.db)
            .find_in_study(study_id, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))
    }
}

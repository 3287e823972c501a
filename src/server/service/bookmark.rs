use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{bookmark::BookmarkRepository, study::StudyRepository},
    error::AppError,
};

pub struct BookmarkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookmarkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bookmarks a study and bumps its counter in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Bookmark stored
    /// - `Err(AppError::NotFound)` - No such study
    /// - `Err(AppError::BadRequest)` - Already bookmarked
    pub async fn add(&self, study_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if StudyRepository::new(&txn).find_by_id(study_id).await?.is_none() {
            return Err(AppError::NotFound("Study not found".to_string()));
        }

        let bookmarks = BookmarkRepository::new(&txn);
        if bookmarks.exists(study_id, user_id).await? {
            return Err(AppError::BadRequest("Study is already bookmarked".to_string()));
        }

        bookmarks.create(study_id, user_id).await?;
        StudyRepository::new(&txn)
            .increment_bookmarks(study_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Removes a bookmark and lowers the counter in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Bookmark removed
    /// - `Err(AppError::NotFound)` - No such study, or it was not bookmarked
    pub async fn remove(&self, study_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if StudyRepository::new(&txn).find_by_id(study_id).await?.is_none() {
            return Err(AppError::NotFound("Study not found".to_string()));
        }

        if BookmarkRepository::new(&txn).delete(study_id, user_id).await? == 0 {
            return Err(AppError::NotFound("Bookmark not found".to_string()));
        }
        StudyRepository::new(&txn)
            .decrement_bookmarks(study_id)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

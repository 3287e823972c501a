use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::notice::NoticeRepository,
    error::AppError,
    model::notice::{CreateNoticeParams, Notice, PaginatedNotices, UpdateNoticeParams},
    util::parse::require_text,
};

pub struct NoticeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoticeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a notice.
    ///
    /// # Returns
    /// - `Ok(Notice)` - The created notice
    /// - `Err(AppError::BadRequest)` - Blank title or body
    pub async fn create(&self, params: CreateNoticeParams) -> Result<Notice, AppError> {
        let title = require_text(&params.title, "title")?;
        let about = require_text(&params.about, "noticeAbout")?;

        Ok(NoticeRepository::new(self.db)
            .create(CreateNoticeParams {
                title,
                about,
                ..params
            })
            .await?)
    }

    pub async fn get_paginated(&self, page_no: u64, limit: u64) -> Result<PaginatedNotices, AppError> {
        Ok(NoticeRepository::new(self.db)
            .get_paginated(page_no, limit)
            .await?)
    }

    /// Gets a notice and counts the view.
    pub async fn view(&self, id: Uuid) -> Result<Option<Notice>, AppError> {
        let repo = NoticeRepository::new(self.db);

        if repo.increment_views(id).await? == 0 {
            return Ok(None);
        }

        Ok(repo.find_by_id(id).await?)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Notice))` - The updated notice
    /// - `Ok(None)` - No such notice
    /// - `Err(AppError::BadRequest)` - Nothing to update, or a blank field
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateNoticeParams,
    ) -> Result<Option<Notice>, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("Nothing to update".to_string()));
        }

        let params = UpdateNoticeParams {
            title: params
                .title
                .map(|title| require_text(&title, "title"))
                .transpose()?,
            about: params
                .about
                .map(|about| require_text(&about, "noticeAbout"))
                .transpose()?,
        };

        Ok(NoticeRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(NoticeRepository::new(self.db).delete(id).await? > 0)
    }
}

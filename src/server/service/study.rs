//! Study listings: creation, browsing, host edits and deletion.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{category::CategoryRepository, study::StudyRepository},
    error::{auth::AuthError, AppError},
    model::study::{
        CreateStudyParams, GetStudiesParam, PaginatedStudies, Study, UpdateStudyParams,
    },
};

pub struct StudyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a study hosted by the caller.
    ///
    /// # Returns
    /// - `Ok(Study)` - The created study, open with every seat vacant
    /// - `Err(AppError::BadRequest)` - Blank text, no schedule or location, capacity
    ///   below one, or unknown category
    pub async fn create(&self, params: CreateStudyParams) -> Result<Study, AppError> {
        if params.title.is_empty() {
            return Err(AppError::BadRequest("title is required".to_string()));
        }
        if params.study_about.is_empty() {
            return Err(AppError::BadRequest("studyAbout is required".to_string()));
        }
        if params.weekday.is_empty() {
            return Err(AppError::BadRequest("At least one weekday is required".to_string()));
        }
        if params.location.is_empty() {
            return Err(AppError::BadRequest("At least one location is required".to_string()));
        }
        if params.capacity < 1 {
            return Err(AppError::BadRequest("capacity must be at least 1".to_string()));
        }
        self.ensure_category(params.category_code).await?;

        let study = StudyRepository::new(self.db).create(params).await?;
        tracing::info!("Study {} created by {}", study.id, study.host_id);

        Ok(study)
    }

    /// Lists one page of studies.
    ///
    /// # Returns
    /// - `Ok(PaginatedStudies)` - The page with total and page counts
    /// - `Err(AppError::BadRequest)` - Category filter names no known category
    pub async fn get_paginated(&self, param: GetStudiesParam) -> Result<PaginatedStudies, AppError> {
        if let Some(code) = param.filter.category_code {
            self.ensure_category(code).await?;
        }

        Ok(StudyRepository::new(self.db).get_paginated(param).await?)
    }

    /// Gets a study and counts the view.
    ///
    /// # Returns
    /// - `Ok(Some(Study))` - The study with the new view count
    /// - `Ok(None)` - No study with that id
    pub async fn view(&self, id: Uuid) -> Result<Option<Study>, AppError> {
        let repo = StudyRepository::new(self.db);

        if repo.increment_views(id).await? == 0 {
            return Ok(None);
        }

        Ok(repo.find_by_id(id).await?)
    }

    /// Applies a host's edit.
    ///
    /// # Returns
    /// - `Ok(Study)` - The updated study
    /// - `Err(AppError::BadRequest)` - Nothing to update, blank text, empty sets,
    ///   capacity below current members, or unknown category
    /// - `Err(AppError::NotFound)` - No study with that id
    /// - `Err(AuthError::AccessDenied)` - Caller is not the host
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        params: UpdateStudyParams,
    ) -> Result<Study, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("Nothing to update".to_string()));
        }

        let study = self.get_hosted(id, user_id).await?;

        if params.title.as_deref() == Some("") {
            return Err(AppError::BadRequest("title cannot be empty".to_string()));
        }
        if params.study_about.as_deref() == Some("") {
            return Err(AppError::BadRequest("studyAbout cannot be empty".to_string()));
        }
        if params.weekday.as_ref().is_some_and(Vec::is_empty) {
            return Err(AppError::BadRequest("At least one weekday is required".to_string()));
        }
        if params.location.as_ref().is_some_and(Vec::is_empty) {
            return Err(AppError::BadRequest("At least one location is required".to_string()));
        }
        if let Some(capacity) = params.capacity {
            if capacity < 1 || capacity < study.members_count {
                return Err(AppError::BadRequest(format!(
                    "capacity must be at least {}",
                    study.members_count.max(1)
                )));
            }
        }
        if let Some(code) = params.category_code {
            self.ensure_category(code).await?;
        }

        StudyRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Study not found".to_string()))
    }

    /// Deletes a study the caller hosts.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.get_hosted(id, user_id).await?;
        StudyRepository::new(self.db).delete(id).await?;

        tracing::info!("Study {} deleted by its host", id);

        Ok(())
    }

    /// Loads a study and checks the caller hosts it.
    async fn get_hosted(&self, id: Uuid, user_id: Uuid) -> Result<Study, AppError> {
        let study = StudyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Study not found".to_string()))?;

        if !study.is_host(user_id) {
            return Err(
                AuthError::AccessDenied(user_id, format!("not the host of study {}", id)).into(),
            );
        }

        Ok(study)
    }

    async fn ensure_category(&self, code: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).exists(code).await? {
            return Err(AppError::BadRequest(format!("Unknown category {}", code)));
        }
        Ok(())
    }
}

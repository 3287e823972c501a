use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    model::profile::{CreateProfileParams, Profile, UpdateProfileParams},
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the caller's profile.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created profile
    /// - `Err(AppError::BadRequest)` - Profile already exists, or the name is blank or taken
    pub async fn create(&self, params: CreateProfileParams) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        if repo.find_by_user_id(params.user_id).await?.is_some() {
            return Err(AppError::BadRequest("Profile already exists".to_string()));
        }
        if params.user_name.is_empty() {
            return Err(AppError::BadRequest("userName is required".to_string()));
        }
        if repo.user_name_taken(&params.user_name, None).await? {
            return Err(AppError::BadRequest("userName is already taken".to_string()));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn get(&self, user_id: Uuid) -> Result<Option<Profile>, AppError> {
        Ok(ProfileRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?)
    }

    /// Applies a partial update to the caller's profile.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The updated profile
    /// - `Ok(None)` - The user has no profile
    /// - `Err(AppError::BadRequest)` - Nothing to update, or the new name is blank or taken
    pub async fn update(
        &self,
        user_id: Uuid,
        params: UpdateProfileParams,
    ) -> Result<Option<Profile>, AppError> {
        if params.is_empty() {
            return Err(AppError::BadRequest("Nothing to update".to_string()));
        }

        let repo = ProfileRepository::new(self.db);

        if let Some(user_name) = &params.user_name {
            if user_name.is_empty() {
                return Err(AppError::BadRequest("userName cannot be empty".to_string()));
            }
            if repo.user_name_taken(user_name, Some(user_id)).await? {
                return Err(AppError::BadRequest("userName is already taken".to_string()));
            }
        }

        Ok(repo.update(user_id, params).await?)
    }

    pub async fn is_user_name_taken(&self, user_name: &str) -> Result<bool, AppError> {
        Ok(ProfileRepository::new(self.db)
            .user_name_taken(user_name.trim(), None)
            .await?)
    }
}

//! Profile data repository.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::profile::{
    join_categories, CreateProfileParams, Profile, UpdateProfileParams,
};

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a profile for an existing user.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created profile
    /// - `Err(DbErr)` - Database error, including a duplicate user or display name
    pub async fn create(&self, params: CreateProfileParams) -> Result<Profile, DbErr> {
        let entity = entity::prelude::UserProfile::insert(entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            user_name: ActiveValue::Set(params.user_name),
            dept: ActiveValue::Set(params.dept),
            grade: ActiveValue::Set(params.grade),
            bio: ActiveValue::Set(params.bio),
            user_about: ActiveValue::Set(params.user_about),
            show_dept: ActiveValue::Set(params.show_dept),
            show_grade: ActiveValue::Set(params.show_grade),
            on_break: ActiveValue::Set(params.on_break),
            link1: ActiveValue::Set(params.link1),
            link2: ActiveValue::Set(params.link2),
            link3: ActiveValue::Set(params.link3),
            categories: ActiveValue::Set(join_categories(&params.categories)),
            image: ActiveValue::Set(params.image),
            email: ActiveValue::Set(params.email),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::UserProfile::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Maps user ids to display names, skipping users without a profile.
    pub async fn get_names(&self, user_ids: &[Uuid]) -> Result<HashMap<Uuid, String>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let profiles = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(profiles
            .into_iter()
            .map(|profile| (profile.user_id, profile.user_name))
            .collect())
    }

    /// Checks whether a display name is taken by anyone other than `except`.
    ///
    /// # Arguments
    /// - `user_name` - Name to look up
    /// - `except` - Owner whose current name should not count as a conflict
    pub async fn user_name_taken(
        &self,
        user_name: &str,
        except: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::UserProfile::find()
            .filter(entity::user_profile::Column::UserName.eq(user_name));

        if let Some(user_id) = except {
            query = query.filter(entity::user_profile::Column::UserId.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update to an existing profile.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The updated profile
    /// - `Ok(None)` - No profile for that user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        user_id: Uuid,
        params: UpdateProfileParams,
    ) -> Result<Option<Profile>, DbErr> {
        let Some(existing) = entity::prelude::UserProfile::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user_profile::ActiveModel = existing.into();

        if let Some(user_name) = params.user_name {
            active.user_name = ActiveValue::Set(user_name);
        }
        if let Some(dept) = params.dept {
            active.dept = ActiveValue::Set(dept);
        }
        if let Some(grade) = params.grade {
            active.grade = ActiveValue::Set(grade);
        }
        if let Some(bio) = params.bio {
            active.bio = ActiveValue::Set(bio);
        }
        if let Some(user_about) = params.user_about {
            active.user_about = ActiveValue::Set(user_about);
        }
        if let Some(show_dept) = params.show_dept {
            active.show_dept = ActiveValue::Set(show_dept);
        }
        if let Some(show_grade) = params.show_grade {
            active.show_grade = ActiveValue::Set(show_grade);
        }
        if let Some(on_break) = params.on_break {
            active.on_break = ActiveValue::Set(on_break);
        }
        if let Some(link1) = params.link1 {
            active.link1 = ActiveValue::Set(Some(link1));
        }
        if let Some(link2) = params.link2 {
            active.link2 = ActiveValue::Set(Some(link2));
        }
        if let Some(link3) = params.link3 {
            active.link3 = ActiveValue::Set(Some(link3));
        }
        if let Some(categories) = params.categories {
            active.categories = ActiveValue::Set(join_categories(&categories));
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Profile::from_entity(entity)))
    }
}

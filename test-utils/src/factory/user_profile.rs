//! Profile factory for creating test display profiles.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating a profile attached to an existing user.
pub struct UserProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    user_name: String,
    dept: String,
    grade: i32,
    show_dept: bool,
    show_grade: bool,
}

impl<'a> UserProfileFactory<'a> {
    /// Creates a new UserProfileFactory with default values.
    ///
    /// Defaults:
    /// - user_name: `"student{n}"`
    /// - dept: `"Computer Science"`
    /// - grade: `3`
    /// - show_dept / show_grade: `true`
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            user_name: format!("student{}", next_id()),
            dept: "Computer Science".to_string(),
            grade: 3,
            show_dept: true,
            show_grade: true,
        }
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn dept(mut self, dept: impl Into<String>) -> Self {
        self.dept = dept.into();
        self
    }

    pub fn grade(mut self, grade: i32) -> Self {
        self.grade = grade;
        self
    }

    pub fn show_dept(mut self, show_dept: bool) -> Self {
        self.show_dept = show_dept;
        self
    }

    pub fn show_grade(mut self, show_grade: bool) -> Self {
        self.show_grade = show_grade;
        self
    }

    pub async fn build(self) -> Result<entity::user_profile::Model, DbErr> {
        entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(self.user_name),
            dept: ActiveValue::Set(self.dept),
            grade: ActiveValue::Set(self.grade),
            bio: ActiveValue::Set(String::new()),
            user_about: ActiveValue::Set(String::new()),
            show_dept: ActiveValue::Set(self.show_dept),
            show_grade: ActiveValue::Set(self.show_grade),
            on_break: ActiveValue::Set(false),
            link1: ActiveValue::Set(None),
            link2: ActiveValue::Set(None),
            link3: ActiveValue::Set(None),
            categories: ActiveValue::Set(String::new()),
            image: ActiveValue::Set(String::new()),
            email: ActiveValue::Set(String::new()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values for the given user.
pub async fn create_user_profile(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::user_profile::Model, DbErr> {
    UserProfileFactory::new(db, user_id).build().await
}

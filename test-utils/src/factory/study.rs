//! Study factory for creating test listings.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::study::Frequency;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating studies with customizable fields.
///
/// Member and vacancy counts are derived from `capacity` and `members_count` so the
/// created row always satisfies `members_count + vacancy == capacity`.
///
/// # Example
///
/// ```rust,ignore
/// let study = StudyFactory::new(&db, host.id, category.code)
///     .title("Algorithms")
///     .weekday("wed,thu")
///     .capacity(2)
///     .build()
///     .await?;
/// ```
pub struct StudyFactory<'a> {
    db: &'a DatabaseConnection,
    host_id: Uuid,
    category_code: i32,
    title: String,
    weekday: String,
    frequency: Frequency,
    location: String,
    capacity: i32,
    members_count: i32,
    is_open: bool,
    views: i32,
    created_at: DateTime<Utc>,
    due_date: DateTime<Utc>,
}

impl<'a> StudyFactory<'a> {
    /// Creates a new StudyFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Study {n}"`
    /// - weekday: `"mon,tue"`, location: `"cafe"`, frequency: `Twice`
    /// - capacity: `4` with no members
    /// - open, due in seven days
    pub fn new(db: &'a DatabaseConnection, host_id: Uuid, category_code: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            host_id,
            category_code,
            title: format!("Study {}", next_id()),
            weekday: "mon,tue".to_string(),
            frequency: Frequency::Twice,
            location: "cafe".to_string(),
            capacity: 4,
            members_count: 0,
            is_open: true,
            views: 0,
            created_at: now,
            due_date: now + Duration::days(7),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn weekday(mut self, weekday: impl Into<String>) -> Self {
        self.weekday = weekday.into();
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn members_count(mut self, members_count: i32) -> Self {
        self.members_count = members_count;
        self
    }

    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn views(mut self, views: i32) -> Self {
        self.views = views;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = due_date;
        self
    }

    pub async fn build(self) -> Result<entity::study::Model, DbErr> {
        entity::study::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(self.created_at),
            title: ActiveValue::Set(self.title),
            study_about: ActiveValue::Set("We meet to study together.".to_string()),
            weekday: ActiveValue::Set(self.weekday),
            frequency: ActiveValue::Set(self.frequency),
            location: ActiveValue::Set(self.location),
            host_id: ActiveValue::Set(self.host_id),
            capacity: ActiveValue::Set(self.capacity),
            members_count: ActiveValue::Set(self.members_count),
            vacancy: ActiveValue::Set(self.capacity - self.members_count),
            is_open: ActiveValue::Set(self.is_open),
            category_code: ActiveValue::Set(self.category_code),
            views: ActiveValue::Set(self.views),
            bookmark_count: ActiveValue::Set(0),
            due_date: ActiveValue::Set(self.due_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a study with default values.
pub async fn create_study(
    db: &DatabaseConnection,
    host_id: Uuid,
    category_code: i32,
) -> Result<entity::study::Model, DbErr> {
    StudyFactory::new(db, host_id, category_code).build().await
}

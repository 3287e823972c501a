//! Notice domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::notice::NoticeDto;

/// Site announcement posted by an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub about: String,
    /// Admin who posted the notice
    pub host_id: Uuid,
    pub views: i32,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn from_entity(entity: entity::notice::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            about: entity.about,
            host_id: entity.host_id,
            views: entity.views,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NoticeDto {
        NoticeDto {
            id: self.id,
            title: self.title,
            notice_about: self.about,
            host_id: self.host_id,
            views: self.views,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNoticeParams {
    pub host_id: Uuid,
    pub title: String,
    pub about: String,
}

/// Partial notice update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateNoticeParams {
    pub title: Option<String>,
    pub about: Option<String>,
}

impl UpdateNoticeParams {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.about.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedNotices {
    pub notices: Vec<Notice>,
    pub page_no: u64,
    pub pages: u64,
    pub total: u64,
}

//! Notification domain models.

use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;
use uuid::Uuid;

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub study_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub title: String,
    pub about: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            study_id: entity.study_id,
            kind: entity.kind,
            title: entity.title,
            about: entity.about,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            study_id: self.study_id,
            kind: self.kind,
            title: self.title,
            about: self.about,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

/// Parameters for notifying a user about activity on a study.
#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    /// Recipient
    pub user_id: Uuid,
    pub study_id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub about: String,
}

impl CreateNotificationParams {
    /// Builds a notification with the stock wording for its kind.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `study_id` - Study the activity happened on
    /// - `study_title` - Title quoted in the message body
    /// - `kind` - What happened
    pub fn for_study(user_id: Uuid, study_id: Uuid, study_title: &str, kind: NotificationKind) -> Self {
        let (title, about) = match kind {
            NotificationKind::NewApply => (
                "New join request",
                format!("Someone asked to join '{}'.", study_title),
            ),
            NotificationKind::Accepted => (
                "Join request accepted",
                format!("You are now a member of '{}'.", study_title),
            ),
            NotificationKind::Rejected => (
                "Join request rejected",
                format!("Your request to join '{}' was declined.", study_title),
            ),
            NotificationKind::NewComment => (
                "New comment",
                format!("A new comment was posted on '{}'.", study_title),
            ),
            NotificationKind::NewReply => (
                "New reply",
                format!("Someone replied to your comment on '{}'.", study_title),
            ),
        };

        Self {
            user_id,
            study_id,
            kind,
            title: title.to_string(),
            about,
        }
    }
}

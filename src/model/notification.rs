use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: Uuid,
    pub study_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub about: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

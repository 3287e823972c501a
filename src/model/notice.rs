use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoticeDto {
    pub title: String,
    pub notice_about: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateNoticeDto {
    pub title: Option<String>,
    pub notice_about: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDto {
    pub id: Uuid,
    pub title: String,
    pub notice_about: String,
    pub host_id: Uuid,
    pub views: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoticeListQuery {
    pub limit: Option<u64>,
    pub page_no: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NoticeListDto {
    pub message: String,
    pub data: Vec<NoticeDto>,
    pub page_no: u64,
    pub pages: u64,
    pub total: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NoticeDetailDto {
    pub message: String,
    pub notice: NoticeDto,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JoinStudyDto {
    pub temp_bio: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AcceptStudyUserDto {
    pub user_id: Uuid,
    pub accept: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyUserDto {
    pub study_id: Uuid,
    pub user_id: Uuid,
    pub is_accepted: bool,
    pub temp_bio: String,
    pub created_at: DateTime<Utc>,
}

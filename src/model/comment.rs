use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub content: String,
    pub reply_to: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UpdateCommentDto {
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Uuid,
    pub study_id: Uuid,
    /// Cleared once the comment is deleted
    pub user_id: Option<Uuid>,
    pub user_name: Option<String>,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    /// Whether the viewer flagged this comment
    pub metoo: bool,
    pub metoo_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommentListDto {
    pub message: String,
    pub comments: Vec<CommentDto>,
}

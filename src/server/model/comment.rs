//! Comment domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::comment::CommentDto;

/// Content written over a comment that was deleted while it still had replies.
pub const DELETED_COMMENT_CONTENT: &str = "This comment has been deleted.";

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub study_id: Uuid,
    pub user_id: Option<Uuid>,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            study_id: entity.study_id,
            user_id: entity.user_id,
            parent_id: entity.parent_id,
            content: entity.content,
            is_deleted: entity.is_deleted,
            created_at: entity.created_at,
        }
    }

    pub fn is_author(&self, user_id: Uuid) -> bool {
        self.user_id == Some(user_id)
    }
}

/// A comment decorated for a particular viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub comment: Comment,
    /// Author's profile name, absent for tombstones and authors without a profile.
    pub user_name: Option<String>,
    pub metoo_count: u64,
    /// Whether the viewer flagged this comment.
    pub metoo: bool,
}

impl CommentView {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            study_id: self.comment.study_id,
            user_id: self.comment.user_id,
            user_name: self.user_name,
            parent_id: self.comment.parent_id,
            content: self.comment.content,
            is_deleted: self.comment.is_deleted,
            created_at: self.comment.created_at,
            metoo: self.metoo,
            metoo_count: self.metoo_count,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub study_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    /// Comment being replied to, if any.
    pub parent_id: Option<Uuid>,
}

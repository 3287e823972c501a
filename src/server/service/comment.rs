//! Inquiry comments under a study.
//!
//! Replies point at their parent. A comment that still has replies is tombstoned on
//! delete instead of removed, and a tombstone is cleaned up once its last reply goes.

use entity::notification::NotificationKind;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        comment::CommentRepository, metoo::MetooRepository,
        notification::NotificationRepository, profile::ProfileRepository,
        study::StudyRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        comment::{Comment, CommentView, CreateCommentParams},
        notification::CreateNotificationParams,
        study::Study,
    },
    util::parse::require_text,
};

/// What happened to a deleted comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentRemoval {
    /// Content replaced because replies still point at it
    Tombstoned,
    Deleted,
}

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists comments on a study annotated for the viewer.
    ///
    /// # Arguments
    /// - `study_id` - Study to list comments for
    /// - `viewer` - Signed in user, if any, whose own flags are marked
    ///
    /// # Returns
    /// - `Ok(Vec<CommentView>)` - Comments oldest first with author names and flag counts
    /// - `Err(AppError::NotFound)` - No such study
    pub async fn list(
        &self,
        study_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<Vec<CommentView>, AppError> {
        self.get_study(study_id).await?;

        let comments = CommentRepository::new(self.db)
            .get_by_study(study_id)
            .await?;

        let ids: Vec<Uuid> = comments.iter().map(|comment| comment.id).collect();
        let authors: Vec<Uuid> = comments.iter().filter_map(|comment| comment.user_id).collect();

        let names = ProfileRepository::new(self.db).get_names(&authors).await?;
        let (counts, flagged) = MetooRepository::new(self.db)
            .summarize(&ids, viewer)
            .await?;

        Ok(comments
            .into_iter()
            .map(|comment| CommentView {
                user_name: comment.user_id.and_then(|id| names.get(&id).cloned()),
                metoo_count: counts.get(&comment.id).copied().unwrap_or(0),
                metoo: flagged.contains(&comment.id),
                comment,
            })
            .collect())
    }

    /// Posts a comment or reply and notifies whoever it concerns.
    ///
    /// A reply notifies the parent's author, a top level comment notifies the host.
    /// Nobody is notified about their own comment. The comment and its notification
    /// are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(AppError::BadRequest)` - Blank content
    /// - `Err(AppError::NotFound)` - No such study, the author has no profile, or the
    ///   parent is not a comment on this study
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let content = require_text(&params.content, "content")?;
        let study = self.get_study(params.study_id).await?;

        if ProfileRepository::new(self.db)
            .find_by_user_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Profile not found".to_string()));
        }

        let parent = match params.parent_id {
            Some(parent_id) => Some(
                CommentRepository::new(self.db)
                    .find_in_study(study.id, parent_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Parent comment not found".to_string()))?,
            ),
            None => None,
        };

        let (recipient, kind) = match &parent {
            Some(parent) => (parent.user_id, NotificationKind::NewReply),
            None => (Some(study.host_id), NotificationKind::NewComment),
        };

        let author = params.user_id;
        let txn = self.db.begin().await?;

        let comment = CommentRepository::new(&txn)
            .create(CreateCommentParams {
                content,
                ..params
            })
            .await?;

        if let Some(recipient) = recipient.filter(|id| *id != author) {
            NotificationRepository::new(&txn)
                .create(CreateNotificationParams::for_study(
                    recipient,
                    study.id,
                    &study.title,
                    kind,
                ))
                .await?;
        }

        txn.commit().await?;

        Ok(comment)
    }

    /// Edits the caller's own comment.
    ///
    /// # Returns
    /// - `Ok(())` - Content replaced
    /// - `Err(AppError::BadRequest)` - Blank content
    /// - `Err(AppError::NotFound)` - No such comment on this study
    /// - `Err(AuthError::AccessDenied)` - Caller did not write the comment
    pub async fn update(
        &self,
        study_id: Uuid,
        comment_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<(), AppError> {
        let content = require_text(content, "content")?;
        let comment = self.get_authored(study_id, comment_id, user_id).await?;

        CommentRepository::new(self.db)
            .update_content(comment.id, &content)
            .await?;

        Ok(())
    }

    /// Deletes the caller's own comment.
    ///
    /// A comment with replies becomes a tombstone. A leaf is removed, and if it was the
    /// last reply under a tombstone the tombstone is removed as well.
    pub async fn delete(
        &self,
        study_id: Uuid,
        comment_id: Uuid,
        user_id: Uuid,
    ) -> Result<CommentRemoval, AppError> {
        let comment = self.get_authored(study_id, comment_id, user_id).await?;

        let txn = self.db.begin().await?;
        let repo = CommentRepository::new(&txn);

        let removal = if repo.count_replies(comment.id).await? > 0 {
            repo.tombstone(comment.id).await?;
            CommentRemoval::Tombstoned
        } else {
            repo.delete(comment.id).await?;

            if let Some(parent_id) = comment.parent_id {
                if let Some(parent) = repo.find_in_study(study_id, parent_id).await? {
                    if parent.is_deleted && repo.count_replies(parent.id).await? == 0 {
                        repo.delete(parent.id).await?;
                    }
                }
            }

            CommentRemoval::Deleted
        };

        txn.commit().await?;

        Ok(removal)
    }

    async fn get_study(&self, study_id: Uuid) -> Result<Study, AppError> {
        StudyRepository::new(self.db)
            .find_by_id(study_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Study not found".to_string()))
    }

    async fn get_authored(
        &self,
        study_id: Uuid,
        comment_id: Uuid,
        user_id: Uuid,
    ) -> Result<Comment, AppError> {
        let comment = CommentRepository::new(self.db)
            .find_in_study(study_id, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        if !comment.is_author(user_id) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("not the author of comment {}", comment_id),
            )
            .into());
        }

        Ok(comment)
    }
}

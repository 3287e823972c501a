//! Comment data repository.
//!
//! Comments form one level of replies under a study. Deleting a comment that still has
//! replies leaves a tombstone in its place so the thread keeps its shape.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::comment::{Comment, CreateCommentParams, DELETED_COMMENT_CONTENT};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a comment or reply.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::prelude::Comment::insert(entity::comment::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            study_id: ActiveValue::Set(params.study_id),
            user_id: ActiveValue::Set(Some(params.user_id)),
            parent_id: ActiveValue::Set(params.parent_id),
            content: ActiveValue::Set(params.content),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Finds a comment only if it belongs to the given study.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found on that study
    /// - `Ok(None)` - Unknown id or the comment is on another study
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_in_study(
        &self,
        study_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(comment_id)
            .filter(entity::comment::Column::StudyId.eq(study_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Lists every comment on a study, oldest first.
    pub async fn get_by_study(&self, study_id: Uuid) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::StudyId.eq(study_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    pub async fn update_content(&self, comment_id: Uuid, content: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(comment_id))
            .col_expr(entity::comment::Column::Content, Expr::value(content))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts replies that point at the comment.
    pub async fn count_replies(&self, comment_id: Uuid) -> Result<u64, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentId.eq(comment_id))
            .count(self.db)
            .await
    }

    /// Replaces the content with a placeholder and detaches the author.
    pub async fn tombstone(&self, comment_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::update_many()
            .filter(entity::comment::Column::Id.eq(comment_id))
            .col_expr(
                entity::comment::Column::Content,
                Expr::value(DELETED_COMMENT_CONTENT),
            )
            .col_expr(entity::comment::Column::UserId, Expr::value(Option::<Uuid>::None))
            .col_expr(entity::comment::Column::IsDeleted, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes the row. Metoo flags cascade.
    pub async fn delete(&self, comment_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

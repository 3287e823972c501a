//! Metoo flag repository.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

pub struct MetooRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MetooRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, comment_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let entity = entity::prelude::Metoo::find_by_id((comment_id, user_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    pub async fn create(&self, comment_id: Uuid, user_id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Metoo::insert(entity::metoo::ActiveModel {
            comment_id: ActiveValue::Set(comment_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, comment_id: Uuid, user_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Metoo::delete_by_id((comment_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Summarizes flags on a set of comments.
    ///
    /// # Arguments
    /// - `comment_ids` - Comments to summarize
    /// - `viewer` - User whose own flags should be reported
    ///
    /// # Returns
    /// - `Ok((counts, flagged))` - Flag count per comment and the comments the viewer flagged
    /// - `Err(DbErr)` - Database error during query
    pub async fn summarize(
        &self,
        comment_ids: &[Uuid],
        viewer: Option<Uuid>,
    ) -> Result<(HashMap<Uuid, u64>, HashSet<Uuid>), DbErr> {
        if comment_ids.is_empty() {
            return Ok((HashMap::new(), HashSet::new()));
        }

        let flags = entity::prelude::Metoo::find()
            .filter(entity::metoo::Column::CommentId.is_in(comment_ids.iter().copied()))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        let mut flagged = HashSet::new();
        for flag in flags {
            *counts.entry(flag.comment_id).or_insert(0) += 1;
            if Some(flag.user_id) == viewer {
                flagged.insert(flag.comment_id);
            }
        }

        Ok((counts, flagged))
    }
}

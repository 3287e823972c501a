//! Notice data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::{
    notice::{CreateNoticeParams, Notice, PaginatedNotices, UpdateNoticeParams},
    page_count,
};

pub struct NoticeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoticeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNoticeParams) -> Result<Notice, DbErr> {
        let entity = entity::prelude::Notice::insert(entity::notice::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(params.title),
            about: ActiveValue::Set(params.about),
            host_id: ActiveValue::Set(params.host_id),
            views: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Notice::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Notice>, DbErr> {
        let entity = entity::prelude::Notice::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Notice::from_entity))
    }

    /// Gets one page of notices, newest first.
    ///
    /// # Arguments
    /// - `page_no` - 1-based page number
    /// - `limit` - Page size
    pub async fn get_paginated(&self, page_no: u64, limit: u64) -> Result<PaginatedNotices, DbErr> {
        let paginator = entity::prelude::Notice::find()
            .order_by_desc(entity::notice::Column::CreatedAt)
            .order_by_asc(entity::notice::Column::Id)
            .paginate(self.db, limit);

        let total = paginator.num_items().await?;
        let notices = paginator
            .fetch_page(page_no.saturating_sub(1))
            .await?
            .into_iter()
            .map(Notice::from_entity)
            .collect();

        Ok(PaginatedNotices {
            notices,
            page_no,
            pages: page_count(total, limit),
            total,
        })
    }

    pub async fn increment_views(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Notice::update_many()
            .filter(entity::notice::Column::Id.eq(id))
            .col_expr(entity::notice::Column::Views, Expr::cust("views + 1"))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// # Returns
    /// - `Ok(Some(Notice))` - The updated notice
    /// - `Ok(None)` - No notice with that id
    pub async fn update(
        &self,
        id: Uuid,
        params: UpdateNoticeParams,
    ) -> Result<Option<Notice>, DbErr> {
        let Some(existing) = entity::prelude::Notice::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::notice::ActiveModel = existing.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(about) = params.about {
            active.about = ActiveValue::Set(about);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Notice::from_entity(entity)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Notice::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}

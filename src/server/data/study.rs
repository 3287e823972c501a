//! Study data repository for database operations.
//!
//! Handles study listings and their counters. Weekday and location sets are stored as
//! comma separated tags; conversion happens in the domain model.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::study::StudyOrder,
    server::model::{
        page_count,
        study::{
            join_locations, join_weekdays, CreateStudyParams, GetStudiesParam, PaginatedStudies,
            Study, UpdateStudyParams,
        },
    },
};

pub struct StudyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudyRepository<'a, C> {
    /// Creates a new StudyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an open study with no members yet, so every seat is vacant.
    ///
    /// # Arguments
    /// - `params` - Validated study fields and host
    ///
    /// # Returns
    /// - `Ok(Study)` - The created study
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateStudyParams) -> Result<Study, DbErr> {
        let entity = entity::prelude::Study::insert(entity::study::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            created_at: ActiveValue::Set(Utc::now()),
            title: ActiveValue::Set(params.title),
            study_about: ActiveValue::Set(params.study_about),
            weekday: ActiveValue::Set(join_weekdays(&params.weekday)),
            frequency: ActiveValue::Set(params.frequency),
            location: ActiveValue::Set(join_locations(&params.location)),
            host_id: ActiveValue::Set(params.host_id),
            capacity: ActiveValue::Set(params.capacity),
            members_count: ActiveValue::Set(0),
            vacancy: ActiveValue::Set(params.capacity),
            is_open: ActiveValue::Set(true),
            category_code: ActiveValue::Set(params.category_code),
            views: ActiveValue::Set(0),
            bookmark_count: ActiveValue::Set(0),
            due_date: ActiveValue::Set(params.due_date),
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Study::from_entity(entity))
    }

    /// Finds a study by id.
    ///
    /// # Returns
    /// - `Ok(Some(Study))` - Study found
    /// - `Ok(None)` - No study with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Study>, DbErr> {
        let entity = entity::prelude::Study::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Study::from_entity))
    }

    /// Gets one page of studies matching the filter.
    ///
    /// Weekday and location filters match studies sharing any tag with the requested
    /// set. Ties in the requested order are broken by id so pages never overlap.
    ///
    /// # Arguments
    /// - `param` - Filter, 1-based page number and page size
    ///
    /// # Returns
    /// - `Ok(PaginatedStudies)` - The page along with total count and page count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(&self, param: GetStudiesParam) -> Result<PaginatedStudies, DbErr> {
        let filter = param.filter;
        let mut condition = Condition::all();

        if let Some(code) = filter.category_code {
            condition = condition.add(entity::study::Column::CategoryCode.eq(code));
        }
        if let Some(frequency) = filter.frequency {
            condition = condition.add(entity::study::Column::Frequency.eq(frequency));
        }
        if !filter.weekday.is_empty() {
            let any_day = filter
                .weekday
                .iter()
                .fold(Condition::any(), |cond, day| {
                    cond.add(entity::study::Column::Weekday.contains(day.as_str()))
                });
            condition = condition.add(any_day);
        }
        if !filter.location.is_empty() {
            let any_place = filter
                .location
                .iter()
                .fold(Condition::any(), |cond, place| {
                    cond.add(entity::study::Column::Location.contains(place.as_str()))
                });
            condition = condition.add(any_place);
        }
        if filter.hide_closed {
            condition = condition
                .add(entity::study::Column::IsOpen.eq(true))
                .add(entity::study::Column::DueDate.gt(Utc::now()));
        }

        let query = entity::prelude::Study::find().filter(condition);
        let query = match filter.order {
            StudyOrder::Latest => query.order_by_desc(entity::study::Column::CreatedAt),
            StudyOrder::Views => query.order_by_desc(entity::study::Column::Views),
            StudyOrder::DueDate => query.order_by_asc(entity::study::Column::DueDate),
        }
        .order_by_asc(entity::study::Column::Id);

        let paginator = query.paginate(self.db, param.limit);
        let total = paginator.num_items().await?;
        let studies = paginator
            .fetch_page(param.page_no.saturating_sub(1))
            .await?
            .into_iter()
            .map(Study::from_entity)
            .collect();

        Ok(PaginatedStudies {
            studies,
            page_no: param.page_no,
            pages: page_count(total, param.limit),
            total,
        })
    }

    /// Increments the view counter.
    ///
    /// # Returns
    /// - `Ok(1)` - Counter incremented
    /// - `Ok(0)` - No study with that id
    pub async fn increment_views(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Study::update_many()
            .filter(entity::study::Column::Id.eq(id))
            .col_expr(entity::study::Column::Views, Expr::cust("views + 1"))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies a partial update and recomputes the vacancy from the new capacity.
    ///
    /// # Returns
    /// - `Ok(Some(Study))` - The updated study
    /// - `Ok(None)` - No study with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, params: UpdateStudyParams) -> Result<Option<Study>, DbErr> {
        let Some(existing) = entity::prelude::Study::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let members_count = existing.members_count;
        let mut active: entity::study::ActiveModel = existing.into();

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(study_about) = params.study_about {
            active.study_about = ActiveValue::Set(study_about);
        }
        if let Some(weekday) = params.weekday {
            active.weekday = ActiveValue::Set(join_weekdays(&weekday));
        }
        if let Some(frequency) = params.frequency {
            active.frequency = ActiveValue::Set(frequency);
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(join_locations(&location));
        }
        if let Some(capacity) = params.capacity {
            active.capacity = ActiveValue::Set(capacity);
            active.vacancy = ActiveValue::Set(capacity - members_count);
        }
        if let Some(category_code) = params.category_code {
            active.category_code = ActiveValue::Set(category_code);
        }
        if let Some(due_date) = params.due_date {
            active.due_date = ActiveValue::Set(due_date);
        }
        if let Some(is_open) = params.is_open {
            active.is_open = ActiveValue::Set(is_open);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Study::from_entity(entity)))
    }

    /// Deletes a study. Join requests, bookmarks and comments cascade.
    ///
    /// # Returns
    /// - `Ok(1)` - Study deleted
    /// - `Ok(0)` - No study with that id
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Study::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }

    /// Moves one seat from vacant to taken.
    ///
    /// Only matches while a seat is vacant, so concurrent accepts cannot overfill.
    ///
    /// # Returns
    /// - `Ok(1)` - Seat taken
    /// - `Ok(0)` - Study missing or already full
    pub async fn take_seat(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Study::update_many()
            .filter(entity::study::Column::Id.eq(id))
            .filter(entity::study::Column::Vacancy.gt(0))
            .col_expr(
                entity::study::Column::MembersCount,
                Expr::cust("members_count + 1"),
            )
            .col_expr(entity::study::Column::Vacancy, Expr::cust("vacancy - 1"))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves one seat from taken back to vacant.
    pub async fn free_seat(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Study::update_many()
            .filter(entity::study::Column::Id.eq(id))
            .filter(entity::study::Column::MembersCount.gt(0))
            .col_expr(
                entity::study::Column::MembersCount,
                Expr::cust("members_count - 1"),
            )
            .col_expr(entity::study::Column::Vacancy, Expr::cust("vacancy + 1"))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn increment_bookmarks(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Study::update_many()
            .filter(entity::study::Column::Id.eq(id))
            .col_expr(
                entity::study::Column::BookmarkCount,
                Expr::cust("bookmark_count + 1"),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn decrement_bookmarks(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Study::update_many()
            .filter(entity::study::Column::Id.eq(id))
            .filter(entity::study::Column::BookmarkCount.gt(0))
            .col_expr(
                entity::study::Column::BookmarkCount,
                Expr::cust("bookmark_count - 1"),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

use crate::server::{
    data::notice::NoticeRepository,
    model::notice::{CreateNoticeParams, UpdateNoticeParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod crud;
mod get_paginated;

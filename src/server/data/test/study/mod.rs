use crate::{
    model::study::{Location, StudyOrder, Weekday},
    server::{
        data::study::StudyRepository,
        model::study::{CreateStudyParams, GetStudiesParam, StudyFilter, UpdateStudyParams},
    },
};
use chrono::{Duration, Utc};
use entity::study::Frequency;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_paginated;
mod seats;
mod update;

fn page(filter: StudyFilter, page_no: u64, limit: u64) -> GetStudiesParam {
    GetStudiesParam {
        filter,
        page_no,
        limit,
    }
}

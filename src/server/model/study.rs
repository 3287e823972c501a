//! Study domain models and parameters.
//!
//! Weekday and location sets are stored as comma separated tags. Conversion between
//! the stored text and typed sets happens here so no other layer sees the encoding.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use entity::study::Frequency;
use uuid::Uuid;

use crate::{
    model::study::{
        CreateStudyDto, Location, StudyDto, StudyListQuery, StudyOrder, UpdateStudyDto, Weekday,
    },
    server::error::AppError,
};

/// Default and maximum page sizes for study and notice listings.
pub const DEFAULT_PAGE_SIZE: u64 = 12;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub study_about: String,
    pub weekday: Vec<Weekday>,
    pub frequency: Frequency,
    pub location: Vec<Location>,
    pub host_id: Uuid,
    pub capacity: i32,
    pub members_count: i32,
    pub vacancy: i32,
    pub is_open: bool,
    pub category_code: i32,
    pub views: i32,
    pub bookmark_count: i32,
    pub due_date: DateTime<Utc>,
}

impl Study {
    /// Converts an entity model to a study domain model at the repository boundary.
    ///
    /// Unrecognized stored tags are skipped and logged.
    pub fn from_entity(entity: entity::study::Model) -> Self {
        Self {
            id: entity.id,
            created_at: entity.created_at,
            title: entity.title,
            study_about: entity.study_about,
            weekday: parse_tags(&entity.weekday),
            frequency: entity.frequency,
            location: parse_tags(&entity.location),
            host_id: entity.host_id,
            capacity: entity.capacity,
            members_count: entity.members_count,
            vacancy: entity.vacancy,
            is_open: entity.is_open,
            category_code: entity.category_code,
            views: entity.views,
            bookmark_count: entity.bookmark_count,
            due_date: entity.due_date,
        }
    }

    pub fn into_dto(self) -> StudyDto {
        StudyDto {
            id: self.id,
            created_at: self.created_at,
            title: self.title,
            study_about: self.study_about,
            weekday: self.weekday,
            frequency: self.frequency,
            location: self.location,
            host_id: self.host_id,
            capacity: self.capacity,
            members_count: self.members_count,
            vacancy: self.vacancy,
            is_open: self.is_open,
            category_code: self.category_code,
            views: self.views,
            bookmark_count: self.bookmark_count,
            due_date: self.due_date,
        }
    }

    pub fn is_host(&self, user_id: Uuid) -> bool {
        self.host_id == user_id
    }
}

/// Parses a comma separated tag list, skipping blanks and unknown tags.
pub fn parse_tags<T: FromStr<Err = String>>(raw: &str) -> Vec<T> {
    raw.split(',')
        .filter(|tag| !tag.trim().is_empty())
        .filter_map(|tag| match tag.parse() {
            Ok(tag) => Some(tag),
            Err(e) => {
                tracing::warn!("Skipping stored tag: {}", e);
                None
            }
        })
        .collect()
}

/// Parses a comma separated tag list from a request, rejecting unknown tags.
pub fn parse_query_tags<T: FromStr<Err = String>>(raw: &str) -> Result<Vec<T>, AppError> {
    raw.split(',')
        .filter(|tag| !tag.trim().is_empty())
        .map(|tag| tag.parse().map_err(AppError::BadRequest))
        .collect()
}

pub fn join_weekdays(weekdays: &[Weekday]) -> String {
    weekdays
        .iter()
        .map(Weekday::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn join_locations(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Removes repeated tags while keeping first occurrence order.
fn dedup<T: PartialEq + Copy>(tags: Vec<T>) -> Vec<T> {
    let mut unique = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

/// Parameters for creating a study.
#[derive(Debug, Clone)]
pub struct CreateStudyParams {
    pub host_id: Uuid,
    pub title: String,
    pub study_about: String,
    pub weekday: Vec<Weekday>,
    pub frequency: Frequency,
    pub location: Vec<Location>,
    pub capacity: i32,
    pub category_code: i32,
    pub due_date: DateTime<Utc>,
}

impl CreateStudyParams {
    pub fn from_dto(host_id: Uuid, dto: CreateStudyDto) -> Self {
        Self {
            host_id,
            title: dto.title.trim().to_string(),
            study_about: dto.study_about.trim().to_string(),
            weekday: dedup(dto.weekday),
            frequency: dto.frequency,
            location: dedup(dto.location),
            capacity: dto.capacity,
            category_code: dto.category_code,
            due_date: dto.due_date,
        }
    }
}

/// Parameters for a partial study update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudyParams {
    pub title: Option<String>,
    pub study_about: Option<String>,
    pub weekday: Option<Vec<Weekday>>,
    pub frequency: Option<Frequency>,
    pub location: Option<Vec<Location>>,
    pub capacity: Option<i32>,
    pub category_code: Option<i32>,
    pub due_date: Option<DateTime<Utc>>,
    pub is_open: Option<bool>,
}

impl UpdateStudyParams {
    pub fn from_dto(dto: UpdateStudyDto) -> Self {
        Self {
            title: dto.title.map(|title| title.trim().to_string()),
            study_about: dto.study_about.map(|about| about.trim().to_string()),
            weekday: dto.weekday.map(dedup),
            frequency: dto.frequency,
            location: dto.location.map(dedup),
            capacity: dto.capacity,
            category_code: dto.category_code,
            due_date: dto.due_date,
            is_open: dto.is_open,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.study_about.is_none()
            && self.weekday.is_none()
            && self.frequency.is_none()
            && self.location.is_none()
            && self.capacity.is_none()
            && self.category_code.is_none()
            && self.due_date.is_none()
            && self.is_open.is_none()
    }
}

/// Listing filters. Empty tag sets do not filter.
#[derive(Debug, Clone, Default)]
pub struct StudyFilter {
    pub category_code: Option<i32>,
    pub frequency: Option<Frequency>,
    /// Matches studies meeting on any of these days.
    pub weekday: Vec<Weekday>,
    /// Matches studies held at any of these locations.
    pub location: Vec<Location>,
    /// Only open studies whose due date has not passed.
    pub hide_closed: bool,
    pub order: StudyOrder,
}

/// Parameters for a paginated study listing. `page_no` is 1-based.
#[derive(Debug, Clone)]
pub struct GetStudiesParam {
    pub filter: StudyFilter,
    pub page_no: u64,
    pub limit: u64,
}

impl GetStudiesParam {
    /// Validates listing query parameters.
    ///
    /// # Returns
    /// - `Ok(GetStudiesParam)` - Parameters with defaults applied
    /// - `Err(AppError::BadRequest)` - Zero or oversized limit, zero page, or an unknown tag
    pub fn from_query(query: StudyListQuery) -> Result<Self, AppError> {
        let (page_no, limit) = page_params(query.page_no, query.limit)?;

        let weekday = match query.weekday {
            Some(raw) => parse_query_tags(&raw)?,
            None => Vec::new(),
        };
        let location = match query.location {
            Some(raw) => parse_query_tags(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            filter: StudyFilter {
                category_code: query.category_code,
                frequency: query.frequency,
                weekday,
                location,
                hide_closed: query.hide_close_tag.unwrap_or(0) != 0,
                order: query.order_by.unwrap_or_default(),
            },
            page_no,
            limit,
        })
    }
}

/// Applies listing defaults and bounds to page number and page size.
pub fn page_params(page_no: Option<u64>, limit: Option<u64>) -> Result<(u64, u64), AppError> {
    let page_no = page_no.unwrap_or(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);

    if page_no == 0 {
        return Err(AppError::BadRequest("pageNo starts at 1".to_string()));
    }
    if limit == 0 || limit > MAX_PAGE_SIZE {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }

    Ok((page_no, limit))
}

#[derive(Debug, Clone)]
pub struct PaginatedStudies {
    pub studies: Vec<Study>,
    pub page_no: u64,
    pub pages: u64,
    pub total: u64,
}

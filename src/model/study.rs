use std::str::FromStr;

use chrono::{DateTime, Utc};
use entity::study::Frequency;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mon" => Ok(Self::Mon),
            "tue" => Ok(Self::Tue),
            "wed" => Ok(Self::Wed),
            "thu" => Ok(Self::Thu),
            "fri" => Ok(Self::Fri),
            "sat" => Ok(Self::Sat),
            "sun" => Ok(Self::Sun),
            other => Err(format!("Unknown weekday '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    NoContact,
    Cafe,
    Library,
    StudyRoom,
    Else,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoContact => "no_contact",
            Self::Cafe => "cafe",
            Self::Library => "library",
            Self::StudyRoom => "study_room",
            Self::Else => "else",
        }
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "no_contact" => Ok(Self::NoContact),
            "cafe" => Ok(Self::Cafe),
            "library" => Ok(Self::Library),
            "study_room" => Ok(Self::StudyRoom),
            "else" => Ok(Self::Else),
            other => Err(format!("Unknown location '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudyDto {
    pub title: String,
    pub study_about: String,
    pub weekday: Vec<Weekday>,
    pub frequency: Frequency,
    pub location: Vec<Location>,
    pub capacity: i32,
    pub category_code: i32,
    pub due_date: DateTime<Utc>,
}

/// Partial study update. Unknown fields such as `createdAt` are rejected.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateStudyDto {
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

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudyDto {
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

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum StudyOrder {
    #[default]
    Latest,
    Views,
    DueDate,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct StudyListQuery {
    pub limit: Option<u64>,
    pub page_no: Option<u64>,
    pub category_code: Option<i32>,
    pub frequency: Option<Frequency>,
    /// Comma separated, e.g. `mon,tue`
    pub weekday: Option<String>,
    /// Comma separated, e.g. `cafe,library`
    pub location: Option<String>,
    pub hide_close_tag: Option<u8>,
    pub order_by: Option<StudyOrder>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StudyListDto {
    pub message: String,
    pub studies: Vec<StudyDto>,
    pub page_no: u64,
    pub pages: u64,
    pub total: u64,
}

//! Profile domain models and parameters.

use uuid::Uuid;

use crate::model::profile::{CreateProfileDto, ProfileDto, UpdateProfileDto};

/// Public profile attached to a verified account.
///
/// Department and grade are only shown to other viewers when the matching
/// `show_*` flag is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: Uuid,
    /// Unique display name
    pub user_name: String,
    pub dept: String,
    pub grade: i32,
    pub bio: String,
    pub user_about: String,
    pub show_dept: bool,
    pub show_grade: bool,
    pub on_break: bool,
    pub link1: Option<String>,
    pub link2: Option<String>,
    pub link3: Option<String>,
    /// Category codes the user is interested in.
    pub categories: Vec<i32>,
    pub image: String,
    pub email: String,
}

impl Profile {
    /// Converts an entity model to a profile domain model at the repository boundary.
    pub fn from_entity(entity: entity::user_profile::Model) -> Self {
        Self {
            user_id: entity.user_id,
            user_name: entity.user_name,
            dept: entity.dept,
            grade: entity.grade,
            bio: entity.bio,
            user_about: entity.user_about,
            show_dept: entity.show_dept,
            show_grade: entity.show_grade,
            on_break: entity.on_break,
            link1: entity.link1,
            link2: entity.link2,
            link3: entity.link3,
            categories: parse_categories(&entity.categories),
            image: entity.image,
            email: entity.email,
        }
    }

    /// Converts to a DTO as seen by a viewer.
    ///
    /// # Arguments
    /// - `viewer_is_owner` - Owners always see their hidden fields
    pub fn into_dto(self, viewer_is_owner: bool) -> ProfileDto {
        let dept = (viewer_is_owner || self.show_dept).then_some(self.dept);
        let grade = (viewer_is_owner || self.show_grade).then_some(self.grade);

        ProfileDto {
            user_id: self.user_id,
            user_name: self.user_name,
            dept,
            grade,
            bio: self.bio,
            user_about: self.user_about,
            show_dept: self.show_dept,
            show_grade: self.show_grade,
            on_break: self.on_break,
            link1: self.link1,
            link2: self.link2,
            link3: self.link3,
            categories: self.categories,
            image: self.image,
            email: self.email,
        }
    }
}

fn parse_categories(raw: &str) -> Vec<i32> {
    raw.split(',')
        .filter(|code| !code.trim().is_empty())
        .filter_map(|code| match code.trim().parse() {
            Ok(code) => Some(code),
            Err(_) => {
                tracing::warn!("Skipping stored category code '{}'", code);
                None
            }
        })
        .collect()
}

pub fn join_categories(codes: &[i32]) -> String {
    codes
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parameters for creating a profile.
#[derive(Debug, Clone)]
pub struct CreateProfileParams {
    pub user_id: Uuid,
    pub user_name: String,
    pub dept: String,
    pub grade: i32,
    pub bio: String,
    pub user_about: String,
    pub show_dept: bool,
    pub show_grade: bool,
    pub on_break: bool,
    pub link1: Option<String>,
    pub link2: Option<String>,
    pub link3: Option<String>,
    pub categories: Vec<i32>,
    pub image: String,
    pub email: String,
}

impl CreateProfileParams {
    pub fn from_dto(user_id: Uuid, dto: CreateProfileDto) -> Self {
        Self {
            user_id,
            user_name: dto.user_name.trim().to_string(),
            dept: dto.dept,
            grade: dto.grade,
            bio: dto.bio,
            user_about: dto.user_about,
            show_dept: dto.show_dept,
            show_grade: dto.show_grade,
            on_break: dto.on_break,
            link1: dto.link1,
            link2: dto.link2,
            link3: dto.link3,
            categories: dto.categories,
            image: dto.image,
            email: dto.email,
        }
    }
}

/// Parameters for a partial profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub user_name: Option<String>,
    pub dept: Option<String>,
    pub grade: Option<i32>,
    pub bio: Option<String>,
    pub user_about: Option<String>,
    pub show_dept: Option<bool>,
    pub show_grade: Option<bool>,
    pub on_break: Option<bool>,
    pub link1: Option<String>,
    pub link2: Option<String>,
    pub link3: Option<String>,
    pub categories: Option<Vec<i32>>,
    pub image: Option<String>,
    pub email: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            user_name: dto.user_name.map(|name| name.trim().to_string()),
            dept: dto.dept,
            grade: dto.grade,
            bio: dto.bio,
            user_about: dto.user_about,
            show_dept: dto.show_dept,
            show_grade: dto.show_grade,
            on_break: dto.on_break,
            link1: dto.link1,
            link2: dto.link2,
            link3: dto.link3,
            categories: dto.categories,
            image: dto.image,
            email: dto.email,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_name.is_none()
            && self.dept.is_none()
            && self.grade.is_none()
            && self.bio.is_none()
            && self.user_about.is_none()
            && self.show_dept.is_none()
            && self.show_grade.is_none()
            && self.on_break.is_none()
            && self.link1.is_none()
            && self.link2.is_none()
            && self.link3.is_none()
            && self.categories.is_none()
            && self.image.is_none()
            && self.email.is_none()
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileDto {
    pub user_name: String,
    pub dept: String,
    pub grade: i32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub user_about: String,
    #[serde(default = "default_true")]
    pub show_dept: bool,
    #[serde(default = "default_true")]
    pub show_grade: bool,
    #[serde(default)]
    pub on_break: bool,
    pub link1: Option<String>,
    pub link2: Option<String>,
    pub link3: Option<String>,
    #[serde(default)]
    pub categories: Vec<i32>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub email: String,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProfileDto {
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

/// Profile as shown to a viewer. `dept` and `grade` are omitted when the owner
/// hides them from others.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub user_id: Uuid,
    pub user_name: String,
    pub dept: Option<String>,
    pub grade: Option<i32>,
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

#[derive(Deserialize, Debug)]
pub struct DuplicateQuery {
    pub username: Option<String>,
}

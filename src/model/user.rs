use chrono::{DateTime, Utc};
use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignupDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VerifyEmailDto {
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequestDto {
    /// Local part of the institutional address
    pub portal_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PasswordResetDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// A study the user applied to, with the state of their request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppliedStudyDto {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub views: i32,
    pub bookmark_count: i32,
    pub is_accepted: bool,
    pub members_count: i32,
    pub capacity: i32,
}

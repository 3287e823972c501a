//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::UserRole;
use uuid::Uuid;

use crate::model::user::{AppliedStudyDto, UserDto};

use super::study::Study;

/// Account with credentials and session state.
///
/// The password hash and pending token never leave the server, `into_dto` drops them.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 PHC string
    pub password: String,
    pub role: UserRole,
    /// Set on logout, cleared on the next successful login.
    pub is_logout: bool,
    /// Latest email verification or password reset token.
    pub token: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password: entity.password,
            role: entity.role,
            is_logout: entity.is_logout,
            token: entity.token,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: self.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Parameters for inserting a freshly signed up account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub token: String,
}

/// Tokens handed out on login.
#[derive(Debug, Clone)]
pub struct LoginTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// A study paired with the state of the user's request to join it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedStudy {
    pub study: Study,
    pub is_accepted: bool,
}

impl AppliedStudy {
    pub fn into_dto(self) -> AppliedStudyDto {
        AppliedStudyDto {
            id: self.study.id,
            title: self.study.title,
            created_at: self.study.created_at,
            views: self.study.views,
            bookmark_count: self.study.bookmark_count,
            is_accepted: self.is_accepted,
            members_count: self.study.members_count,
            capacity: self.study.capacity,
        }
    }
}

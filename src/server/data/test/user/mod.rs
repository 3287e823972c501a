use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_applied_studies;
mod promote_admins;
mod verify_guest;

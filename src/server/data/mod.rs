//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! aggregate in the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separate from business logic. Every
//! repository is generic over `ConnectionTrait` so services can compose several of them
//! inside one transaction.

pub mod bookmark;
pub mod category;
pub mod comment;
pub mod metoo;
pub mod notice;
pub mod notification;
pub mod profile;
pub mod study;
pub mod study_user;
pub mod user;

#[cfg(test)]
mod test;

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation and ownership rules
//! - **Orchestration**: Coordinating repository calls and outgoing mail
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step writes in one database transaction

pub mod bookmark;
pub mod comment;
pub mod mail;
pub mod metoo;
pub mod notice;
pub mod notification;
pub mod profile;
pub mod study;
pub mod study_user;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;

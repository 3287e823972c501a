//! HTTP handlers.
//!
//! Each handler authenticates through `AuthGuard` first, then unpacks its body, calls
//! one service and converts the domain result into a DTO. Handlers that authenticate
//! return the guard's cookie jar so a refreshed access token reaches the client.

pub mod bookmark;
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

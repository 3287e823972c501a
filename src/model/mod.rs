pub mod api;
pub mod comment;
pub mod notice;
pub mod notification;
pub mod profile;
pub mod study;
pub mod study_user;
pub mod user;

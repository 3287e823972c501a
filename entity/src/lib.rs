pub mod prelude;

pub mod bookmark;
pub mod category;
pub mod comment;
pub mod metoo;
pub mod notice;
pub mod notification;
pub mod study;
pub mod study_user;
pub mod user;
pub mod user_profile;

mod comment;
mod metoo;
mod notice;
mod study;
mod study_user;
mod user;

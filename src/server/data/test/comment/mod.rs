use crate::server::{
    data::comment::CommentRepository,
    model::comment::{CreateCommentParams, DELETED_COMMENT_CONTENT},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;

use crate::server::data::metoo::MetooRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod summarize;

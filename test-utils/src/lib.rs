//! Caustudy Test Utils
//!
//! Shared testing utilities for the study-group backend. The crate offers a builder for
//! test contexts backed by in-memory SQLite databases plus factories that insert rows
//! with unique defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder choosing which entity tables to create
//! - **TestContext**: the resulting environment holding the database connection
//! - **TestError**: errors raised while setting the environment up
//! - **factory**: builders for users, profiles, studies, comments and notices
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn hosts_a_study() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_study_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (host, study) = factory::helpers::create_study_with_host(db).await?;
//!     assert_eq!(study.host_id, host.id);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! for the common case. Defaults are unique per call so factories can be invoked
//! repeatedly in one test without tripping unique constraints.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let host = factory::create_user(&db).await?;
//! let category = factory::create_category(&db).await?;
//! let study = factory::study::StudyFactory::new(&db, host.id, category.code)
//!     .capacity(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - accounts
//! - `user_profile` - display profiles
//! - `category` - study categories
//! - `study` - study listings
//! - `study_user` - join requests
//! - `comment` - inquiry comments
//! - `notice` - announcements
//! - `helpers` - combinations with their dependencies

pub mod category;
pub mod comment;
pub mod helpers;
pub mod notice;
pub mod study;
pub mod study_user;
pub mod user;
pub mod user_profile;

pub use category::create_category;
pub use comment::create_comment;
pub use notice::create_notice;
pub use study::create_study;
pub use study_user::create_study_user;
pub use user::create_user;
pub use user_profile::create_user_profile;

//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and shortcuts for creating entities together
//! with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a host user, a category, and a study hosted by that user.
///
/// # Returns
/// - `Ok((host, study))` - The created host and study
/// - `Err(DbErr)` - Database error during creation
pub async fn create_study_with_host(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::study::Model), DbErr> {
    let host = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let study = crate::factory::study::create_study(db, host.id, category.code).await?;

    Ok((host, study))
}

/// Creates a user with a profile.
///
/// Comment authors need a profile, so this is the usual starting point for
/// comment tests.
pub async fn create_user_with_profile(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::user_profile::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let profile = crate::factory::user_profile::create_user_profile(db, user.id).await?;

    Ok((user, profile))
}

/// Creates a user who has applied to the given study.
///
/// # Arguments
/// - `db` - Database connection
/// - `study_id` - Study to apply to
/// - `accepted` - Whether the request is already accepted
///
/// # Returns
/// - `Ok((applicant, request))` - The applicant and their join request
/// - `Err(DbErr)` - Database error during creation
pub async fn create_applicant(
    db: &DatabaseConnection,
    study_id: uuid::Uuid,
    accepted: bool,
) -> Result<(entity::user::Model, entity::study_user::Model), DbErr> {
    let applicant = crate::factory::user::create_user(db).await?;
    let request = crate::factory::study_user::StudyUserFactory::new(db, study_id, applicant.id)
        .accepted(accepted)
        .build()
        .await?;

    Ok((applicant, request))
}

use crate::server::{
    data::bookmark::BookmarkRepository, error::AppError, service::bookmark::BookmarkService,
};
use axum::{http::StatusCode, response::IntoResponse};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

/// Tests bookmarking keeps the counter in step.
///
/// Expected: counter 1 after add, 0 after remove, duplicates and unknowns rejected
#[tokio::test]
async fn bookmarks_update_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;
    let user = factory::create_user(db).await?;

    let service = BookmarkService::new(db);
    service.add(study.id, user.id).await?;

    let counted = entity::prelude::Study::find_by_id(study.id).one(db).await?.unwrap();
    assert_eq!(counted.bookmark_count, 1);

    assert!(matches!(
        service.add(study.id, user.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.add(Uuid::new_v4(), user.id).await,
        Err(AppError::NotFound(_))
    ));

    service.remove(study.id, user.id).await?;
    let counted = entity::prelude::Study::find_by_id(study.id).one(db).await?.unwrap();
    assert_eq!(counted.bookmark_count, 0);

    assert!(matches!(
        service.remove(study.id, user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests a duplicate that gets past the existence check, as two racing requests would.
///
/// Expected: the key violation answers 400, not 500
#[tokio::test]
async fn duplicate_insert_is_bad_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;
    let user = factory::create_user(db).await?;

    let repo = BookmarkRepository::new(db);
    repo.create(study.id, user.id).await?;

    let err = repo.create(study.id, user.id).await.unwrap_err();
    assert_eq!(
        AppError::from(err).into_response().status(),
        StatusCode::BAD_REQUEST
    );

    Ok(())
}

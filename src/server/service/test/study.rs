use crate::{
    model::study::{Location, Weekday},
    server::{
        error::{auth::AuthError, AppError},
        model::study::{CreateStudyParams, UpdateStudyParams},
        service::study::StudyService,
    },
};
use chrono::{Duration, Utc};
use entity::study::Frequency;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

fn params(host_id: Uuid, category_code: i32) -> CreateStudyParams {
    CreateStudyParams {
        host_id,
        title: "Rust study".to_string(),
        study_about: "Reading the book together".to_string(),
        weekday: vec![Weekday::Tue],
        frequency: Frequency::Once,
        location: vec![Location::NoContact],
        capacity: 3,
        category_code,
        due_date: Utc::now() + Duration::days(10),
    }
}

/// Tests creation validation.
///
/// Expected: BadRequest for each invalid field, Ok for a valid study
#[tokio::test]
async fn validates_new_study() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let service = StudyService::new(db);

    let invalid = [
        CreateStudyParams {
            title: String::new(),
            ..params(host.id, category.code)
        },
        CreateStudyParams {
            capacity: 0,
            ..params(host.id, category.code)
        },
        CreateStudyParams {
            weekday: vec![],
            ..params(host.id, category.code)
        },
        CreateStudyParams {
            location: vec![],
            ..params(host.id, category.code)
        },
        params(host.id, -5),
    ];
    for params in invalid {
        assert!(matches!(
            service.create(params).await,
            Err(AppError::BadRequest(_))
        ));
    }

    let study = service.create(params(host.id, category.code)).await?;
    assert_eq!(study.vacancy, 3);

    Ok(())
}

/// Tests viewing counts views and reports missing studies.
///
/// Expected: views 1 after one view, None for unknown id
#[tokio::test]
async fn view_counts_views() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;
    let service = StudyService::new(db);

    assert_eq!(service.view(study.id).await?.unwrap().views, 1);
    assert!(service.view(Uuid::new_v4()).await?.is_none());

    Ok(())
}

/// Tests that only the host may edit or delete.
///
/// Expected: AccessDenied for others, Ok for the host
#[tokio::test]
async fn only_host_edits_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (host, study) = factory::helpers::create_study_with_host(db).await?;
    let stranger = factory::create_user(db).await?;
    let service = StudyService::new(db);

    let close = || UpdateStudyParams {
        is_open: Some(false),
        ..Default::default()
    };

    assert!(matches!(
        service.update(study.id, stranger.id, close()).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service.delete(study.id, stranger.id).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let closed = service.update(study.id, host.id, close()).await?;
    assert!(!closed.is_open);

    service.delete(study.id, host.id).await?;
    assert!(matches!(
        service.delete(study.id, host.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests edit validation.
///
/// Expected: BadRequest for empty edits and capacity below members
#[tokio::test]
async fn rejects_invalid_edits() -> Result<(), AppError> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let study = factory::study::StudyFactory::new(db, host.id, category.code)
        .capacity(4)
        .members_count(3)
        .build()
        .await?;
    let service = StudyService::new(db);

    assert!(matches!(
        service
            .update(study.id, host.id, UpdateStudyParams::default())
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .update(
                study.id,
                host.id,
                UpdateStudyParams {
                    capacity: Some(2),
                    ..Default::default()
                }
            )
            .await,
        Err(AppError::BadRequest(_))
    ));

    let grown = service
        .update(
            study.id,
            host.id,
            UpdateStudyParams {
                capacity: Some(3),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(grown.vacancy, 0);

    Ok(())
}

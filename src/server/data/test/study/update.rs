use super::*;

/// Tests that changing capacity recomputes the vacancy.
///
/// Expected: vacancy equals new capacity minus members
#[tokio::test]
async fn recomputes_vacancy_on_capacity_change() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let study = factory::study::StudyFactory::new(db, host.id, category.code)
        .capacity(4)
        .members_count(2)
        .build()
        .await?;

    let repo = StudyRepository::new(db);
    let updated = repo
        .update(
            study.id,
            UpdateStudyParams {
                capacity: Some(6),
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.capacity, 6);
    assert_eq!(updated.members_count, 2);
    assert_eq!(updated.vacancy, 4);
    assert_eq!(updated.title, "Renamed");

    Ok(())
}

/// Tests updating a missing study.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_study() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyRepository::new(db);
    let result = repo
        .update(
            Uuid::new_v4(),
            UpdateStudyParams {
                is_open: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the view counter and deletion.
///
/// Expected: views incremented, study gone after delete
#[tokio::test]
async fn increments_views_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;

    let repo = StudyRepository::new(db);
    assert_eq!(repo.increment_views(study.id).await?, 1);
    assert_eq!(repo.increment_views(study.id).await?, 1);
    assert_eq!(repo.find_by_id(study.id).await?.unwrap().views, 2);

    assert_eq!(repo.delete(study.id).await?, 1);
    assert!(repo.find_by_id(study.id).await?.is_none());
    assert_eq!(repo.increment_views(study.id).await?, 0);

    Ok(())
}

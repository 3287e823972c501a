use super::*;

/// Tests creating a study.
///
/// Verifies that new studies are open with every seat vacant and no counters.
///
/// Expected: Ok(Study)
#[tokio::test]
async fn creates_open_study_with_vacant_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let due_date = Utc::now() + Duration::days(3);

    let repo = StudyRepository::new(db);
    let study = repo
        .create(CreateStudyParams {
            host_id: host.id,
            title: "Algorithms".to_string(),
            study_about: "Weekly problem solving".to_string(),
            weekday: vec![Weekday::Mon, Weekday::Wed],
            frequency: Frequency::Twice,
            location: vec![Location::Library],
            capacity: 5,
            category_code: category.code,
            due_date,
        })
        .await?;

    assert_eq!(study.capacity, 5);
    assert_eq!(study.vacancy, 5);
    assert_eq!(study.members_count, 0);
    assert_eq!(study.views, 0);
    assert_eq!(study.bookmark_count, 0);
    assert!(study.is_open);
    assert_eq!(study.weekday, vec![Weekday::Mon, Weekday::Wed]);

    let found = repo.find_by_id(study.id).await?.unwrap();
    assert_eq!(found.location, vec![Location::Library]);
    assert_eq!(found.due_date.timestamp(), due_date.timestamp());

    Ok(())
}

/// Tests that an unknown category is rejected by the foreign key.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;

    let repo = StudyRepository::new(db);
    let result = repo
        .create(CreateStudyParams {
            host_id: host.id,
            title: "Algorithms".to_string(),
            study_about: "Weekly problem solving".to_string(),
            weekday: vec![Weekday::Mon],
            frequency: Frequency::Once,
            location: vec![Location::Cafe],
            capacity: 5,
            category_code: -1,
            due_date: Utc::now(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that looking up a missing study returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudyRepository::new(db);
    assert!(repo.find_by_id(Uuid::new_v4()).await?.is_none());

    Ok(())
}

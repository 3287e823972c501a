use super::*;

/// Tests taking seats until the study is full.
///
/// Expected: Ok(1) while seats remain, Ok(0) once full
#[tokio::test]
async fn takes_seats_until_full() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let study = factory::study::StudyFactory::new(db, host.id, category.code)
        .capacity(1)
        .build()
        .await?;

    let repo = StudyRepository::new(db);
    assert_eq!(repo.take_seat(study.id).await?, 1);
    assert_eq!(repo.take_seat(study.id).await?, 0);

    let full = repo.find_by_id(study.id).await?.unwrap();
    assert_eq!(full.members_count, 1);
    assert_eq!(full.vacancy, 0);

    assert_eq!(repo.free_seat(study.id).await?, 1);
    let freed = repo.find_by_id(study.id).await?.unwrap();
    assert_eq!(freed.members_count, 0);
    assert_eq!(freed.vacancy, 1);
    assert_eq!(repo.free_seat(study.id).await?, 0);

    Ok(())
}

/// Tests that the bookmark counter never goes negative.
///
/// Expected: Ok(0) when decrementing from zero
#[tokio::test]
async fn bookmark_counter_stays_non_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;

    let repo = StudyRepository::new(db);
    assert_eq!(repo.decrement_bookmarks(study.id).await?, 0);
    assert_eq!(repo.increment_bookmarks(study.id).await?, 1);
    assert_eq!(repo.find_by_id(study.id).await?.unwrap().bookmark_count, 1);
    assert_eq!(repo.decrement_bookmarks(study.id).await?, 1);
    assert_eq!(repo.find_by_id(study.id).await?.unwrap().bookmark_count, 0);

    Ok(())
}

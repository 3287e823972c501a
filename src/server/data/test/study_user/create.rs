use super::*;

/// Tests creating a pending join request.
///
/// Expected: Ok(StudyUser) not yet accepted
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;
    let applicant = factory::create_user(db).await?;

    let repo = StudyUserRepository::new(db);
    let request = repo
        .create(study.id, applicant.id, "Hello".to_string())
        .await?;

    assert!(!request.is_accepted);
    assert_eq!(request.temp_bio, "Hello");

    Ok(())
}

/// Tests that the composite key blocks duplicate requests.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;
    let applicant = factory::create_user(db).await?;

    let repo = StudyUserRepository::new(db);
    repo.create(study.id, applicant.id, "Hello".to_string())
        .await?;
    let result = repo
        .create(study.id, applicant.id, "Again".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests editing, accepting and withdrawing a request.
///
/// Expected: each update touches one row, then the request is gone
#[tokio::test]
async fn updates_and_deletes_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, study) = factory::helpers::create_study_with_host(db).await?;
    let (applicant, _request) = factory::helpers::create_applicant(db, study.id, false).await?;

    let repo = StudyUserRepository::new(db);
    assert_eq!(repo.update_temp_bio(study.id, applicant.id, "Updated").await?, 1);
    assert_eq!(repo.set_accepted(study.id, applicant.id, true).await?, 1);

    let request = repo.find(study.id, applicant.id).await?.unwrap();
    assert_eq!(request.temp_bio, "Updated");
    assert!(request.is_accepted);

    assert_eq!(repo.delete(study.id, applicant.id).await?, 1);
    assert!(repo.find(study.id, applicant.id).await?.is_none());
    assert_eq!(repo.update_temp_bio(study.id, applicant.id, "Gone").await?, 0);

    Ok(())
}

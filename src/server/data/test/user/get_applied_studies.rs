use super::*;

/// Tests listing studies a user applied to with their acceptance state.
///
/// Expected: Ok(Vec) with one entry per request
#[tokio::test]
async fn lists_requests_with_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_host, pending_study) = factory::helpers::create_study_with_host(db).await?;
    let (_other_host, accepted_study) = factory::helpers::create_study_with_host(db).await?;
    let applicant = factory::create_user(db).await?;

    factory::create_study_user(db, pending_study.id, applicant.id).await?;
    factory::study_user::StudyUserFactory::new(db, accepted_study.id, applicant.id)
        .accepted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let applied = repo.get_applied_studies(applicant.id).await?;

    assert_eq!(applied.len(), 2);
    let accepted = applied
        .iter()
        .find(|entry| entry.study.id == accepted_study.id)
        .unwrap();
    assert!(accepted.is_accepted);
    let pending = applied
        .iter()
        .find(|entry| entry.study.id == pending_study.id)
        .unwrap();
    assert!(!pending.is_accepted);

    Ok(())
}

/// Tests that a user with no requests gets an empty list.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn empty_without_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_study_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.get_applied_studies(user.id).await?.is_empty());

    Ok(())
}

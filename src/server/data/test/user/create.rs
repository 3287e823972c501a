use super::*;

/// Tests creating an account at signup.
///
/// Verifies that new accounts start as unverified guests holding their
/// verification token.
///
/// Expected: Ok(User) with GUEST role
#[tokio::test]
async fn creates_guest_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let id = Uuid::new_v4();
    let user = repo
        .create(CreateUserParams {
            id,
            email: "new@cau.ac.kr".to_string(),
            password_hash: "hash".to_string(),
            token: "token".to_string(),
        })
        .await?;

    assert_eq!(user.id, id);
    assert_eq!(user.role, UserRole::Guest);
    assert!(!user.is_logout);

    let found = repo.find_by_email("new@cau.ac.kr").await?;
    assert_eq!(found.map(|user| user.id), Some(id));

    let by_token = repo.find_by_token("token").await?;
    assert_eq!(by_token.map(|user| user.id), Some(id));

    Ok(())
}

/// Tests that an email can only be registered once.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            id: Uuid::new_v4(),
            email: existing.email,
            password_hash: "hash".to_string(),
            token: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that an empty token never matches an account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn empty_token_matches_nobody() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).token("").build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_token("").await?.is_none());

    Ok(())
}

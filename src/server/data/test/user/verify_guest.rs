use super::*;

/// Tests promoting a verified guest.
///
/// Expected: Ok(1) and role USER
#[tokio::test]
async fn promotes_guest_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::user::UserFactory::new(db)
        .role(UserRole::Guest)
        .token("pending")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.verify_guest(guest.id).await?, 1);

    let user = repo.find_by_id(guest.id).await?.unwrap();
    assert_eq!(user.role, UserRole::User);
    assert!(user.token.is_empty());

    Ok(())
}

/// Tests that verified accounts are not touched again.
///
/// Expected: Ok(0)
#[tokio::test]
async fn ignores_verified_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.verify_guest(admin.id).await?, 0);
    assert_eq!(repo.verify_guest(Uuid::new_v4()).await?, 0);

    let user = repo.find_by_id(admin.id).await?.unwrap();
    assert_eq!(user.role, UserRole::Admin);

    Ok(())
}

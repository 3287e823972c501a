use super::*;

/// Tests deleting an account.
///
/// Expected: Ok(1), then Ok(0) for the same id
#[tokio::test]
async fn deletes_account_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _profile) = factory::helpers::create_user_with_profile(db).await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.delete(user.id).await?, 1);
    assert!(repo.find_by_id(user.id).await?.is_none());
    assert_eq!(repo.delete(user.id).await?, 0);

    Ok(())
}

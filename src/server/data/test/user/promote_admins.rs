use super::*;

/// Tests promoting configured accounts to admin.
///
/// Verifies only listed accounts change and existing admins are not counted.
///
/// Expected: Ok(1)
#[tokio::test]
async fn promotes_listed_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let listed = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let promoted = repo
        .promote_admins(&[listed.email.clone(), "absent@cau.ac.kr".to_string()])
        .await?;
    assert_eq!(promoted, 1);

    assert!(repo.find_by_id(listed.id).await?.unwrap().is_admin());
    assert!(!repo.find_by_id(other.id).await?.unwrap().is_admin());

    let again = repo.promote_admins(&[listed.email]).await?;
    assert_eq!(again, 0);

    Ok(())
}

/// Tests that an empty list is a no-op.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_list_promotes_nobody() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert_eq!(repo.promote_admins(&[]).await?, 0);

    Ok(())
}

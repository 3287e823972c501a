use super::*;

/// Tests anonymous requests pass through.
///
/// Expected: Ok(None)
#[tokio::test]
async fn anonymous_without_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let (user, _) = AuthGuard::new(&state, CookieJar::new()).optional().await?;
    assert!(user.is_none());

    Ok(())
}

/// Tests a signed in caller is resolved.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn resolves_signed_in_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = factory::create_user(db).await?;
    let jar = jar_with(&state, REFRESH_TOKEN_COOKIE, &user, TokenKind::Refresh);

    let (resolved, jar) = AuthGuard::new(&state, jar).optional().await?;
    assert_eq!(resolved.map(|user| user.id), Some(user.id));
    assert!(jar.get(ACCESS_TOKEN_COOKIE).is_some());

    Ok(())
}

/// Tests a logged out caller is treated as anonymous and the flag stays set.
///
/// Expected: Ok(None), user still marked logged out
#[tokio::test]
async fn logged_out_user_is_anonymous() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = factory::user::UserFactory::new(db)
        .is_logout(true)
        .build()
        .await?;
    let jar = jar_with(&state, ACCESS_TOKEN_COOKIE, &user, TokenKind::Access);

    let (resolved, _) = AuthGuard::new(&state, jar).optional().await?;
    assert!(resolved.is_none());

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_logout);

    Ok(())
}

use super::*;

/// Tests a valid access token authenticates.
///
/// Expected: Ok with the cookie jar returned unchanged
#[tokio::test]
async fn accepts_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = factory::create_user(db).await?;
    let jar = jar_with(&state, ACCESS_TOKEN_COOKIE, &user, TokenKind::Access);

    let (resolved, jar) = AuthGuard::new(&state, jar).require(&[]).await?;

    assert_eq!(resolved.id, user.id);
    assert!(jar.get(REFRESH_TOKEN_COOKIE).is_none());

    Ok(())
}

/// Tests a refresh token stands in for a missing access token.
///
/// Expected: Ok and a new access cookie in the returned jar
#[tokio::test]
async fn refresh_token_issues_access_cookie() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = factory::create_user(db).await?;
    let jar = jar_with(&state, REFRESH_TOKEN_COOKIE, &user, TokenKind::Refresh);

    let (resolved, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    assert_eq!(resolved.id, user.id);

    let access = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
    let claims = state.tokens.verify(access.value(), TokenKind::Access)?;
    assert_eq!(claims.id, user.id);

    Ok(())
}

/// Tests an expired access token falls back to the refresh token.
///
/// Expected: Ok with the user
#[tokio::test]
async fn expired_access_falls_back_to_refresh() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = factory::create_user(db).await?;
    let expired = state.tokens.issue_with_lifetime(
        user.id,
        &user.email,
        TokenKind::Access,
        Duration::hours(-1),
    )?;
    let refresh = state.tokens.issue(user.id, &user.email, TokenKind::Refresh)?;
    let jar = CookieJar::new()
        .add(Cookie::new(ACCESS_TOKEN_COOKIE, expired))
        .add(Cookie::new(REFRESH_TOKEN_COOKIE, refresh));

    let (resolved, _) = AuthGuard::new(&state, jar).require(&[]).await?;
    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests requests without usable tokens are rejected.
///
/// Expected: Err(AuthError::Unauthenticated) for no cookies and for wrong kinds
#[tokio::test]
async fn rejects_missing_or_wrong_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let result = AuthGuard::new(&state, CookieJar::new()).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthenticated))
    ));

    let user = factory::create_user(db).await?;
    let jar = jar_with(&state, ACCESS_TOKEN_COOKIE, &user, TokenKind::Email);
    let result = AuthGuard::new(&state, jar).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthenticated))
    ));

    Ok(())
}

/// Tests a token for a deleted account.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = factory::create_user(db).await?;
    let jar = jar_with(&state, ACCESS_TOKEN_COOKIE, &user, TokenKind::Access);
    entity::prelude::User::delete_by_id(user.id).exec(db).await?;

    let result = AuthGuard::new(&state, jar).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}

/// Tests tokens of a logged out account stop working.
///
/// Expected: Err(AuthError::LoggedOut) on both the access and refresh paths
#[tokio::test]
async fn rejects_logged_out_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let user = factory::user::UserFactory::new(db)
        .is_logout(true)
        .build()
        .await?;

    for (cookie, kind) in [
        (ACCESS_TOKEN_COOKIE, TokenKind::Access),
        (REFRESH_TOKEN_COOKIE, TokenKind::Refresh),
    ] {
        let jar = jar_with(&state, cookie, &user, kind);
        let result = AuthGuard::new(&state, jar).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::LoggedOut(_)))
        ));
    }

    Ok(())
}

/// Tests the admin permission.
///
/// Expected: Ok for admins, Err(AuthError::AccessDenied) for everyone else
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let admin = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .build()
        .await?;
    let member = factory::create_user(db).await?;

    let jar = jar_with(&state, ACCESS_TOKEN_COOKIE, &admin, TokenKind::Access);
    let (resolved, _) = AuthGuard::new(&state, jar)
        .require(&[Permission::Admin])
        .await?;
    assert!(resolved.is_admin());

    let jar = jar_with(&state, ACCESS_TOKEN_COOKIE, &member, TokenKind::Access);
    let result = AuthGuard::new(&state, jar)
        .require(&[Permission::Admin])
        .await;
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, member.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|_| ())),
    }

    Ok(())
}

/// Tests a forged token signed with another secret.
///
/// Expected: Err(AuthError::Unauthenticated)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::for_test(db.clone());

    let forged = crate::server::service::token::TokenKeys::new("other-secret").issue(
        Uuid::new_v4(),
        "someone@cau.ac.kr",
        TokenKind::Access,
    )?;
    let jar = CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, forged));

    let result = AuthGuard::new(&state, jar).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Unauthenticated))
    ));

    Ok(())
}

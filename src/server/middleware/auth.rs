use axum_extra::extract::cookie::CookieJar;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::cookie::{set_access_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE},
    model::user::User,
    service::token::{Claims, TokenKeys, TokenKind},
    state::AppState,
};

pub enum Permission {
    Admin,
}

/// Resolves the calling user from the `accessToken` / `refreshToken` cookies.
///
/// A valid access token wins. Failing that, a valid refresh token authenticates the
/// request and a fresh access cookie is added to the returned jar, so handlers must
/// send that jar back with their response.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
    jar: CookieJar,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, jar: CookieJar) -> Self {
        Self {
            db: &state.db,
            tokens: &state.tokens,
            jar,
        }
    }

    /// Requires an authenticated user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok((User, CookieJar))` - The caller and the jar to respond with
    /// - `Err(AuthError::Unauthenticated)` - No valid access or refresh token
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject was deleted
    /// - `Err(AuthError::LoggedOut)` - The account logged out since the token was issued
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(self, permissions: &[Permission]) -> Result<(User, CookieJar), AppError> {
        let (user, jar) = self.authenticate().await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok((user, jar))
    }

    /// Resolves the caller if possible, treating any authentication failure as an
    /// anonymous request. Database errors still propagate.
    pub async fn optional(self) -> Result<(Option<User>, CookieJar), AppError> {
        let jar = self.jar.clone();

        match self.authenticate().await {
            Ok((user, jar)) => Ok((Some(user), jar)),
            Err(AppError::AuthErr(e)) => {
                tracing::debug!("Continuing anonymously: {}", e);
                Ok((None, jar))
            }
            Err(e) => Err(e),
        }
    }

    async fn authenticate(self) -> Result<(User, CookieJar), AppError> {
        let (claims, jar) = match self.verify_cookie(ACCESS_TOKEN_COOKIE, TokenKind::Access) {
            Some(claims) => (claims, self.jar),
            None => {
                let Some(claims) = self.verify_cookie(REFRESH_TOKEN_COOKIE, TokenKind::Refresh)
                else {
                    return Err(AuthError::Unauthenticated.into());
                };

                let access_token = self
                    .tokens
                    .issue(claims.id, &claims.email, TokenKind::Access)?;
                (claims, set_access_cookie(self.jar, access_token))
            }
        };

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(claims.id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.id).into());
        };

        if user.is_logout {
            user_repo.set_logout(user.id, true).await?;
            return Err(AuthError::LoggedOut(user.id).into());
        }

        Ok((user, jar))
    }

    fn verify_cookie(&self, name: &str, kind: TokenKind) -> Option<Claims> {
        let cookie = self.jar.get(name)?;

        match self.tokens.verify(cookie.value(), kind) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!("Ignoring {} cookie: {}", name, e);
                None
            }
        }
    }
}

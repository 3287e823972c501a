//! Token cookies.
//!
//! Both cookies are HttpOnly, scoped to `/`, `SameSite=Lax`, and expire together
//! with the token they carry.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::server::{model::user::LoginTokens, service::token::TokenKind};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

fn token_cookie(name: &'static str, token: String, kind: TokenKind) -> Cookie<'static> {
    Cookie::build((name, token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(kind.lifetime().num_seconds()))
        .build()
}

/// Adds both session cookies after a login.
pub fn set_login_cookies(jar: CookieJar, tokens: LoginTokens) -> CookieJar {
    jar.add(token_cookie(
        ACCESS_TOKEN_COOKIE,
        tokens.access_token,
        TokenKind::Access,
    ))
    .add(token_cookie(
        REFRESH_TOKEN_COOKIE,
        tokens.refresh_token,
        TokenKind::Refresh,
    ))
}

/// Replaces the access cookie, used when a refresh token stands in for an expired one.
pub fn set_access_cookie(jar: CookieJar, access_token: String) -> CookieJar {
    jar.add(token_cookie(
        ACCESS_TOKEN_COOKIE,
        access_token,
        TokenKind::Access,
    ))
}

/// Expires both session cookies on logout or account deletion.
pub fn clear_login_cookies(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(ACCESS_TOKEN_COOKIE).path("/"))
        .remove(Cookie::build(REFRESH_TOKEN_COOKIE).path("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_cookies_are_http_only() {
        let jar = set_login_cookies(
            CookieJar::new(),
            LoginTokens {
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
            },
        );

        let access = jar.get(ACCESS_TOKEN_COOKIE).unwrap();
        assert_eq!(access.value(), "access");
        assert_eq!(access.http_only(), Some(true));
        assert_eq!(access.path(), Some("/"));
        assert_eq!(access.same_site(), Some(SameSite::Lax));
        assert_eq!(access.max_age(), Some(time::Duration::hours(3)));

        let refresh = jar.get(REFRESH_TOKEN_COOKIE).unwrap();
        assert_eq!(refresh.value(), "refresh");
        assert_eq!(refresh.max_age(), Some(time::Duration::days(14)));
    }

    #[test]
    fn clearing_removes_both_cookies() {
        let jar = set_login_cookies(
            CookieJar::new(),
            LoginTokens {
                access_token: "access".to_string(),
                refresh_token: "refresh".to_string(),
            },
        );

        let jar = clear_login_cookies(jar);

        assert!(jar.get(ACCESS_TOKEN_COOKIE).is_none());
        assert!(jar.get(REFRESH_TOKEN_COOKIE).is_none());
    }
}

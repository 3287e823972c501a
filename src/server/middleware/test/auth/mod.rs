use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::Duration;
use entity::user::UserRole;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        cookie::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE},
    },
    service::token::TokenKind,
    state::AppState,
};

mod optional;
mod require;

/// Builds a jar holding a token of `kind` for the given user under `cookie`.
fn jar_with(
    state: &AppState,
    cookie: &'static str,
    user: &entity::user::Model,
    kind: TokenKind,
) -> CookieJar {
    let token = state.tokens.issue(user.id, &user.email, kind).unwrap();
    CookieJar::new().add(Cookie::new(cookie, token))
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use entity::user::UserRole;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    middleware::cookie::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE},
    service::token::TokenKind,
    state::AppState,
};


/// Cookie jar carrying a valid access token for the user.
fn signed_in(state: &AppState, user: &entity::user::Model) -> CookieJar {
    let token = state
        .tokens
        .issue(user.id, &user.email, TokenKind::Access)
        .unwrap();
    CookieJar::new().add(Cookie::new(ACCESS_TOKEN_COOKIE, token))
}

/// Reads a response body as JSON.
async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collects `Set-Cookie` header values.
fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

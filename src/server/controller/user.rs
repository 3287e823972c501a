use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{CreatedDto, DataDto, MessageDto},
        user::{
            AppliedStudyDto, LoginDto, PasswordResetDto, PasswordResetRequestDto, SignupDto,
            VerifyEmailDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            cookie::{clear_login_cookies, set_login_cookies},
        },
        service::user::UserService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// POST /api/user - Register an account
///
/// Creates a `GUEST` account and mails a verification link to the address.
///
/// # Returns
/// - `201 Created`: `{message, id}`
/// - `400 Bad Request`: Missing field, foreign domain or address already registered
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user_service = UserService::new(&state.db, &state.tokens, &state.mailer);
    let id = user_service
        .signup(&payload.email, &payload.password, &state.email_domain)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedDto {
            message: "Verification mail sent".to_string(),
            id,
        }),
    ))
}

/// PATCH /api/user/{id}/role - Confirm an email address
///
/// # Returns
/// - `200 OK`: Account promoted to `USER`
/// - `403 Forbidden`: Token expired, invalid, or issued for another account
/// - `404 Not Found`: No unverified account with that id
pub async fn verify_email(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VerifyEmailDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "User")?;
    let Json(payload) = payload?;

    let user_service = UserService::new(&state.db, &state.tokens, &state.mailer);
    user_service.verify_email(id, &payload.token).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Email verified"))))
}

/// POST /api/user/login - Log in
///
/// Sets the `accessToken` and `refreshToken` cookies.
///
/// # Returns
/// - `200 OK`: `{message, data: {id, email, role}}` with cookies
/// - `400 Bad Request`: Missing email or password
/// - `403 Forbidden`: Wrong password
/// - `404 Not Found`: Unknown email
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user_service = UserService::new(&state.db, &state.tokens, &state.mailer);
    let (user, tokens) = user_service
        .login(&payload.email, &payload.password)
        .await?;

    tracing::info!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        set_login_cookies(jar, tokens),
        Json(DataDto::new("Logged in", user.into_dto())),
    ))
}

/// PATCH /api/user/logout - Log out
///
/// Marks the account logged out, which voids every outstanding token, and clears
/// both cookies.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;

    let user_service = UserService::new(&state.db, &state.tokens, &state.mailer);
    user_service.logout(user.id).await?;

    Ok((
        StatusCode::OK,
        clear_login_cookies(jar),
        Json(MessageDto::new("Logged out")),
    ))
}

/// GET /api/user - Current account
pub async fn get_user(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;

    Ok((StatusCode::OK, jar, Json(DataDto::new("OK", user.into_dto()))))
}

/// DELETE /api/user - Delete the current account
///
/// Profile, hosted studies, join requests, bookmarks and notifications go with it.
/// Comments stay behind without an author.
pub async fn delete_user(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;

    let user_service = UserService::new(&state.db, &state.tokens, &state.mailer);
    if !user_service.delete(user.id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    tracing::info!("Deleted account {}", user.id);

    Ok((
        StatusCode::OK,
        clear_login_cookies(jar),
        Json(MessageDto::new("Account deleted")),
    ))
}

/// PATCH /api/user/password - Request a password reset link
///
/// # Returns
/// - `200 OK`: Reset mail sent
/// - `400 Bad Request`: Missing portal id
/// - `404 Not Found`: No account with that address
pub async fn request_password_reset(
    State(state): State<AppState>,
    payload: Result<Json<PasswordResetRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user_service = UserService::new(&state.db, &state.tokens, &state.mailer);
    user_service
        .request_password_reset(&payload.portal_id, &state.email_domain)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password reset mail sent"))))
}

/// PATCH /api/user/password/{token} - Set a new password from a reset link
///
/// # Returns
/// - `200 OK`: Password replaced
/// - `400 Bad Request`: Missing email or password
/// - `403 Forbidden`: Token invalid or issued for another account
/// - `404 Not Found`: No account holds this token
pub async fn reset_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    payload: Result<Json<PasswordResetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user_service = UserService::new(&state.db, &state.tokens, &state.mailer);
    user_service
        .reset_password(&token, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password changed"))))
}

/// GET /api/user/study/applied - Studies the current user applied to
pub async fn get_applied_studies(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;

    let user_service = UserService::new(&state.db, &state.tokens, &state.mailer);
    let studies: Vec<AppliedStudyDto> = user_service
        .get_applied_studies(user.id)
        .await?
        .into_iter()
        .map(|applied| applied.into_dto())
        .collect();

    Ok((StatusCode::OK, jar, Json(DataDto::new("OK", studies))))
}

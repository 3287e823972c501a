use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{DataDto, MessageDto},
        notification::NotificationDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::notification::NotificationService, state::AppState, util::parse::parse_id,
    },
};

/// GET /api/user/notification - The caller's notifications, newest first
pub async fn get_notifications(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;

    let notifications: Vec<NotificationDto> = NotificationService::new(&state.db)
        .list(user.id)
        .await?
        .into_iter()
        .map(|notification| notification.into_dto())
        .collect();

    Ok((StatusCode::OK, jar, Json(DataDto::new("OK", notifications))))
}

/// PATCH /api/user/notification/{id} - Mark a notification read
///
/// # Returns
/// - `200 OK`: Marked read
/// - `404 Not Found`: Unknown id, or the notification belongs to someone else
pub async fn read_notification(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let id = parse_id(&id, "Notification")?;

    NotificationService::new(&state.db)
        .mark_read(id, user.id)
        .await?;

    Ok((StatusCode::OK, jar, Json(MessageDto::new("Notification read"))))
}

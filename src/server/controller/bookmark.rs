use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::api::MessageDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::bookmark::BookmarkService,
        state::AppState, util::parse::parse_id,
    },
};

/// POST /api/study/{studyid}/bookmark
///
/// # Returns
/// - `201 Created`: Bookmarked
/// - `400 Bad Request`: Already bookmarked
/// - `404 Not Found`: No such study
pub async fn add_bookmark(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;

    BookmarkService::new(&state.db)
        .add(study_id, user.id)
        .await?;

    Ok((StatusCode::CREATED, jar, Json(MessageDto::new("Bookmarked"))))
}

/// DELETE /api/study/{studyid}/bookmark
pub async fn remove_bookmark(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;

    BookmarkService::new(&state.db)
        .remove(study_id, user.id)
        .await?;

    Ok((StatusCode::OK, jar, Json(MessageDto::new("Bookmark removed"))))
}

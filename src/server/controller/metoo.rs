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
        error::AppError, middleware::auth::AuthGuard, service::metoo::MetooService,
        state::AppState, util::parse::parse_id,
    },
};

/// POST /api/study/{studyid}/comment/{commentid}/metoo - "Me too" on a question
///
/// # Returns
/// - `201 Created`: Flag stored
/// - `400 Bad Request`: Own comment or already flagged
/// - `404 Not Found`: No such study or comment
pub async fn add_metoo(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((study_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let comment_id = parse_id(&comment_id, "Comment")?;

    MetooService::new(&state.db)
        .add(study_id, comment_id, user.id)
        .await?;

    Ok((StatusCode::CREATED, jar, Json(MessageDto::new("Me too"))))
}

/// DELETE /api/study/{studyid}/comment/{commentid}/metoo
pub async fn remove_metoo(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((study_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let comment_id = parse_id(&comment_id, "Comment")?;

    MetooService::new(&state.db)
        .remove(study_id, comment_id, user.id)
        .await?;

    Ok((StatusCode::OK, jar, Json(MessageDto::new("Me too removed"))))
}

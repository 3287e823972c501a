use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{DataDto, MessageDto},
        study_user::{AcceptStudyUserDto, JoinStudyDto, StudyUserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::study_user::AcceptStudyUserParams,
        service::study_user::StudyUserService, state::AppState, util::parse::parse_id,
    },
};

/// GET /api/study/user/{studyid} - Join requests on a study
///
/// The host sees every request, anyone else only accepted members.
pub async fn get_study_users(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;

    let requests: Vec<StudyUserDto> = StudyUserService::new(&state.db)
        .list(study_id, user.id)
        .await?
        .into_iter()
        .map(|request| request.into_dto())
        .collect();

    Ok((StatusCode::OK, jar, Json(DataDto::new("OK", requests))))
}

/// POST /api/study/user/{studyid} - Apply to a study
///
/// # Returns
/// - `201 Created`: Pending request stored, host notified
/// - `400 Bad Request`: Missing introduction, own study, closed study, or already applied
/// - `404 Not Found`: No such study
pub async fn join_study(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
    payload: Result<Json<JoinStudyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let Json(payload) = payload?;

    StudyUserService::new(&state.db)
        .join(study_id, user.id, &payload.temp_bio)
        .await?;

    Ok((StatusCode::CREATED, jar, Json(MessageDto::new("Applied"))))
}

/// PATCH /api/study/user/{studyid} - Edit the introduction on the caller's request
pub async fn update_temp_bio(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
    payload: Result<Json<JoinStudyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let Json(payload) = payload?;

    StudyUserService::new(&state.db)
        .update_temp_bio(study_id, user.id, &payload.temp_bio)
        .await?;

    Ok((StatusCode::OK, jar, Json(MessageDto::new("Introduction updated"))))
}

/// DELETE /api/study/user/{studyid} - Withdraw the caller's request
pub async fn withdraw(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;

    StudyUserService::new(&state.db)
        .withdraw(study_id, user.id)
        .await?;

    Ok((StatusCode::OK, jar, Json(MessageDto::new("Request withdrawn"))))
}

/// PATCH /api/study/user/{studyid}/accept - Host decides on a request
///
/// # Access Control
/// - Host only
///
/// # Returns
/// - `200 OK`: Decision stored, applicant notified
/// - `400 Bad Request`: Missing field or the study is full
/// - `403 Forbidden`: Caller is not the host
/// - `404 Not Found`: No such study or request
pub async fn decide(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
    payload: Result<Json<AcceptStudyUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let Json(payload) = payload?;

    let request = StudyUserService::new(&state.db)
        .decide(AcceptStudyUserParams {
            study_id,
            host_id: user.id,
            user_id: payload.user_id,
            accept: payload.accept,
        })
        .await?;

    Ok((
        StatusCode::OK,
        jar,
        Json(DataDto::new("Decision saved", request.into_dto())),
    ))
}

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{CreatedDto, DataDto, MessageDto},
        study::{CreateStudyDto, StudyListDto, StudyListQuery, UpdateStudyDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::study::{CreateStudyParams, GetStudiesParam, UpdateStudyParams},
        service::study::StudyService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// POST /api/study - Open a study hosted by the caller
///
/// The study starts open with no members and every seat vacant.
///
/// # Returns
/// - `201 Created`: `{message, id}`
/// - `400 Bad Request`: Missing or invalid field, unknown category
pub async fn create_study(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<CreateStudyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let Json(payload) = payload?;

    let study = StudyService::new(&state.db)
        .create(CreateStudyParams::from_dto(user.id, payload))
        .await?;

    tracing::info!("User {} opened study {}", user.id, study.id);

    Ok((
        StatusCode::CREATED,
        jar,
        Json(CreatedDto {
            message: "Study created".to_string(),
            id: study.id,
        }),
    ))
}

/// GET /api/study - Browse studies
///
/// # Query Parameters
/// - `limit`, `pageNo`: Page size (default 12, at most 100) and 1-based page
/// - `categoryCode`, `frequency`: Exact matches
/// - `weekday`, `location`: Comma separated, a study matches when it has any of them
/// - `hideCloseTag`: `1` hides closed and past due studies
/// - `orderBy`: `latest` (default), `views` or `dueDate`
///
/// # Returns
/// - `200 OK`: `{message, studies, pageNo, pages, total}`
/// - `400 Bad Request`: Invalid paging or filter value
pub async fn get_studies(
    State(state): State<AppState>,
    query: Result<Query<StudyListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let param = GetStudiesParam::from_query(query)?;

    let page = StudyService::new(&state.db).get_paginated(param).await?;

    Ok((
        StatusCode::OK,
        Json(StudyListDto {
            message: "OK".to_string(),
            studies: page.studies.into_iter().map(|s| s.into_dto()).collect(),
            page_no: page.page_no,
            pages: page.pages,
            total: page.total,
        }),
    ))
}

/// GET /api/study/{studyid} - Study detail
///
/// Every successful read counts as a view.
pub async fn get_study(
    State(state): State<AppState>,
    Path(study_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let study_id = parse_id(&study_id, "Study")?;

    let Some(study) = StudyService::new(&state.db).view(study_id).await? else {
        return Err(AppError::NotFound("Study not found".to_string()));
    };

    Ok((StatusCode::OK, Json(DataDto::new("OK", study.into_dto()))))
}

/// PATCH /api/study/{studyid} - Edit a study
///
/// # Access Control
/// - Host only
///
/// # Returns
/// - `200 OK`: `{message, data}` with the updated study
/// - `400 Bad Request`: Empty body, unknown field, invalid value, or capacity below
///   the current member count
/// - `403 Forbidden`: Caller is not the host
/// - `404 Not Found`: No such study
pub async fn update_study(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
    payload: Result<Json<UpdateStudyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let Json(payload) = payload?;

    let study = StudyService::new(&state.db)
        .update(study_id, user.id, UpdateStudyParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        jar,
        Json(DataDto::new("Study updated", study.into_dto())),
    ))
}

/// DELETE /api/study/{studyid} - Delete a study
///
/// # Access Control
/// - Host only
pub async fn delete_study(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;

    StudyService::new(&state.db)
        .delete(study_id, user.id)
        .await?;

    tracing::info!("User {} deleted study {}", user.id, study_id);

    Ok((StatusCode::OK, jar, Json(MessageDto::new("Study deleted"))))
}

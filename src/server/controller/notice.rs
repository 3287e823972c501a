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
        api::{CreatedDto, MessageDto},
        notice::{
            CreateNoticeDto, NoticeDetailDto, NoticeListDto, NoticeListQuery, UpdateNoticeDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            notice::{CreateNoticeParams, UpdateNoticeParams},
            study::page_params,
        },
        service::notice::NoticeService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// GET /api/notice - Announcements, newest first
///
/// # Returns
/// - `200 OK`: `{message, data, pageNo, pages, total}`
/// - `400 Bad Request`: Invalid paging
pub async fn get_notices(
    State(state): State<AppState>,
    query: Result<Query<NoticeListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let (page_no, limit) = page_params(query.page_no, query.limit)?;

    let page = NoticeService::new(&state.db)
        .get_paginated(page_no, limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(NoticeListDto {
            message: "OK".to_string(),
            data: page.notices.into_iter().map(|n| n.into_dto()).collect(),
            page_no: page.page_no,
            pages: page.pages,
            total: page.total,
        }),
    ))
}

/// POST /api/notice - Publish an announcement
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created`: `{message, id}`
/// - `400 Bad Request`: Blank title or body
/// - `401 Unauthorized` / `403 Forbidden`: Not signed in / not an admin
pub async fn create_notice(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<CreateNoticeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (admin, jar) = AuthGuard::new(&state, jar)
        .require(&[Permission::Admin])
        .await?;
    let Json(payload) = payload?;

    let notice = NoticeService::new(&state.db)
        .create(CreateNoticeParams {
            host_id: admin.id,
            title: payload.title,
            about: payload.notice_about,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        jar,
        Json(CreatedDto {
            message: "Notice created".to_string(),
            id: notice.id,
        }),
    ))
}

/// GET /api/notice/{id} - Read an announcement
///
/// Every successful read counts as a view.
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Notice")?;

    let Some(notice) = NoticeService::new(&state.db).view(id).await? else {
        return Err(AppError::NotFound("Notice not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(NoticeDetailDto {
            message: "OK".to_string(),
            notice: notice.into_dto(),
        }),
    ))
}

/// PATCH /api/notice/{id} - Edit an announcement
///
/// # Access Control
/// - `Admin`
pub async fn update_notice(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoticeDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (_, jar) = AuthGuard::new(&state, jar)
        .require(&[Permission::Admin])
        .await?;
    let id = parse_id(&id, "Notice")?;
    let Json(payload) = payload?;

    let Some(notice) = NoticeService::new(&state.db)
        .update(
            id,
            UpdateNoticeParams {
                title: payload.title,
                about: payload.notice_about,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound("Notice not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        jar,
        Json(NoticeDetailDto {
            message: "Notice updated".to_string(),
            notice: notice.into_dto(),
        }),
    ))
}

/// DELETE /api/notice/{id} - Remove an announcement
///
/// # Access Control
/// - `Admin`
pub async fn delete_notice(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, jar) = AuthGuard::new(&state, jar)
        .require(&[Permission::Admin])
        .await?;
    let id = parse_id(&id, "Notice")?;

    if !NoticeService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Notice not found".to_string()));
    }

    Ok((StatusCode::OK, jar, Json(MessageDto::new("Notice deleted"))))
}

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
use entity::user::UserRole;
use uuid::Uuid;

use crate::{
    model::{
        api::{CreatedDto, DataDto},
        profile::{CreateProfileDto, DuplicateQuery, UpdateProfileDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        model::{
            profile::{CreateProfileParams, UpdateProfileParams},
            user::User,
        },
        service::profile::ProfileService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Profiles are only written by their owner.
fn ensure_owner(user: &User, profile_id: Uuid) -> Result<(), AppError> {
    if user.id != profile_id {
        return Err(AuthError::AccessDenied(
            user.id,
            format!("attempted to edit profile {}", profile_id),
        )
        .into());
    }

    Ok(())
}

/// POST /api/user/profile/{id} - Create the caller's profile
///
/// # Access Control
/// - Verified account, `GUEST` accounts are refused
/// - `id` must be the caller's own id
///
/// # Returns
/// - `201 Created`: `{message, id}`
/// - `400 Bad Request`: Invalid body, profile exists, or name blank or taken
/// - `403 Forbidden`: Another user's id or unverified account
pub async fn create_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    payload: Result<Json<CreateProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let profile_id = parse_id(&id, "User")?;
    ensure_owner(&user, profile_id)?;

    if user.role == UserRole::Guest {
        return Err(AuthError::AccessDenied(user.id, "email not verified".to_string()).into());
    }

    let Json(payload) = payload?;

    let profile = ProfileService::new(&state.db)
        .create(CreateProfileParams::from_dto(user.id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        jar,
        Json(CreatedDto {
            message: "Profile created".to_string(),
            id: profile.user_id,
        }),
    ))
}

/// GET /api/user/profile/{id} - View a profile
///
/// Department and grade are hidden from other viewers when the owner turned them off.
pub async fn get_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let profile_id = parse_id(&id, "Profile")?;

    let Some(profile) = ProfileService::new(&state.db).get(profile_id).await? else {
        return Err(AppError::NotFound("Profile not found".to_string()));
    };

    let is_owner = profile.user_id == user.id;

    Ok((
        StatusCode::OK,
        jar,
        Json(DataDto::new("OK", profile.into_dto(is_owner))),
    ))
}

/// PATCH /api/user/profile/{id} - Edit the caller's profile
///
/// # Returns
/// - `200 OK`: `{message, data}` with the updated profile
/// - `400 Bad Request`: Empty body, unknown field, or name blank or taken
/// - `403 Forbidden`: Another user's profile
/// - `404 Not Found`: The caller has no profile yet
pub async fn update_profile(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let profile_id = parse_id(&id, "Profile")?;
    ensure_owner(&user, profile_id)?;

    let Json(payload) = payload?;

    let Some(profile) = ProfileService::new(&state.db)
        .update(user.id, UpdateProfileParams::from_dto(payload))
        .await?
    else {
        return Err(AppError::NotFound("Profile not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        jar,
        Json(DataDto::new("Profile updated", profile.into_dto(true))),
    ))
}

/// GET /api/user/profile/duplicate?username= - Check whether a name is taken
///
/// # Returns
/// - `200 OK`: `{message, data: bool}`, `true` when taken
/// - `400 Bad Request`: Missing or blank `username`
pub async fn check_user_name(
    State(state): State<AppState>,
    query: Result<Query<DuplicateQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let user_name = query
        .username
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("username is required".to_string()))?;

    let taken = ProfileService::new(&state.db)
        .is_user_name_taken(&user_name)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new("OK", taken))))
}

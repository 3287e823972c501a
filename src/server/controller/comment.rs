use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::{CreatedDto, MessageDto},
        comment::{CommentListDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::CreateCommentParams,
        service::comment::{CommentRemoval, CommentService},
        state::AppState,
        util::parse::parse_id,
    },
};

/// GET /api/study/{studyid}/comment - Inquiry thread of a study
///
/// Signing in is optional. A signed in viewer sees which comments they flagged.
///
/// # Returns
/// - `200 OK`: `{message, comments}` oldest first
/// - `404 Not Found`: No such study
pub async fn get_comments(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (viewer, jar) = AuthGuard::new(&state, jar).optional().await?;
    let study_id = parse_id(&study_id, "Study")?;

    let comments = CommentService::new(&state.db)
        .list(study_id, viewer.map(|user| user.id))
        .await?;

    Ok((
        StatusCode::OK,
        jar,
        Json(CommentListDto {
            message: "OK".to_string(),
            comments: comments.into_iter().map(|view| view.into_dto()).collect(),
        }),
    ))
}

/// POST /api/study/{studyid}/comment - Comment or reply
///
/// `replyTo` names the parent comment, which must belong to the same study.
///
/// # Returns
/// - `201 Created`: `{message, id}`
/// - `400 Bad Request`: Blank content
/// - `404 Not Found`: No such study or parent, or the caller has no profile
pub async fn create_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(study_id): Path<String>,
    payload: Result<Json<CreateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let Json(payload) = payload?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParams {
            study_id,
            user_id: user.id,
            content: payload.content,
            parent_id: payload.reply_to,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        jar,
        Json(CreatedDto {
            message: "Comment created".to_string(),
            id: comment.id,
        }),
    ))
}

/// PATCH /api/study/{studyid}/comment/{commentid} - Edit own comment
pub async fn update_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((study_id, comment_id)): Path<(String, String)>,
    payload: Result<Json<UpdateCommentDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let comment_id = parse_id(&comment_id, "Comment")?;
    let Json(payload) = payload?;

    CommentService::new(&state.db)
        .update(study_id, comment_id, user.id, &payload.content)
        .await?;

    Ok((StatusCode::OK, jar, Json(MessageDto::new("Comment updated"))))
}

/// DELETE /api/study/{studyid}/comment/{commentid} - Delete own comment
///
/// A comment with replies keeps its place in the thread with placeholder content.
pub async fn delete_comment(
    State(state): State<AppState>,
    jar: CookieJar,
    Path((study_id, comment_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (user, jar) = AuthGuard::new(&state, jar).require(&[]).await?;
    let study_id = parse_id(&study_id, "Study")?;
    let comment_id = parse_id(&comment_id, "Comment")?;

    let removal = CommentService::new(&state.db)
        .delete(study_id, comment_id, user.id)
        .await?;

    let message = match removal {
        CommentRemoval::Tombstoned => "Comment cleared",
        CommentRemoval::Deleted => "Comment deleted",
    };

    Ok((StatusCode::OK, jar, Json(MessageDto::new(message))))
}

//! Error types and HTTP response handling.
//!
//! `AppError` is the single error type returned by services and controllers. Its
//! `IntoResponse` implementation is the one place where failures are mapped to HTTP
//! status codes, so handlers never choose error statuses themselves.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
///
/// Wraps domain errors and infrastructure failures. Most variants use `#[from]` so the
/// `?` operator converts them automatically. `AuthError` carries its own status mapping
/// while the generic variants map to standard codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure to sign a JSON web token.
    ///
    /// Verification failures are reported through `AuthError` instead, this variant
    /// only covers issuing tokens.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or hash parsing failure.
    #[error(transparent)]
    PasswordHashErr(#[from] argon2::password_hash::Error),

    /// SMTP transport failure while delivering mail.
    #[error(transparent)]
    MailErr(#[from] lettre::transport::smtp::Error),

    /// Mail message could not be assembled.
    #[error(transparent)]
    MailBuildErr(#[from] lettre::error::Error),

    /// Mailbox address could not be parsed.
    #[error(transparent)]
    MailAddressErr(#[from] lettre::address::AddressError),

    /// Listener or other I/O failure during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Malformed, incomplete or mistyped JSON bodies are client errors.
///
/// Axum reports missing fields as 422 by default, the API contract answers 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Unknown enum values or non-numeric paging in a query string.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, and for unique constraint violations that slip
///   past a service's existence check when two requests race
/// - 404 Not Found - For `NotFound`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else, logged server-side
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { message: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { message: msg })).into_response()
            }
            Self::DbErr(err)
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                tracing::debug!("Unique constraint violated: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        message: "Resource already exists".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                InternalServerError(format!("Internal error: {}", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// The error is logged in full while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Neither a valid access token nor a valid refresh token was presented.
    #[error("Request carried no valid access or refresh token")]
    Unauthenticated,

    /// Token subject no longer exists in the database.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(Uuid),

    /// The account logged out, tokens issued before that are void.
    #[error("User {0} is logged out")]
    LoggedOut(Uuid),

    /// Login attempted with a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Email verification or reset token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Token failed signature, format or kind checks.
    #[error("Invalid token")]
    InvalidToken,

    /// Token is valid but was issued for a different account.
    #[error("Token does not belong to user {0}")]
    TokenMismatch(Uuid),

    /// Authenticated user lacks the rights for the operation.
    ///
    /// # Fields
    /// - ID of the user that was denied
    /// - Reason logged at debug level
    #[error("User {0} denied access: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `Unauthenticated` / `UserNotInDatabase` / `LoggedOut` → 401 "Login required"
/// - `InvalidCredentials` → 403 "Incorrect password"
/// - `TokenExpired` / `InvalidToken` / `TokenMismatch` → 403
/// - `AccessDenied` → 403 "Access denied"
///
/// Details are logged at debug level, client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::Unauthenticated | Self::UserNotInDatabase(_) | Self::LoggedOut(_) => {
                (StatusCode::UNAUTHORIZED, "Login required")
            }
            Self::InvalidCredentials => (StatusCode::FORBIDDEN, "Incorrect password"),
            Self::TokenExpired => (StatusCode::FORBIDDEN, "Token expired"),
            Self::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token"),
            Self::TokenMismatch(_) => (StatusCode::FORBIDDEN, "Token does not match this user"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. It holds:
//! - Database connection pool
//! - Token signing keys
//! - Outgoing mailer
//! - Institutional email domain accepted at signup

use sea_orm::DatabaseConnection;

use crate::server::service::{mail::Mailer, token::TokenKeys};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenKeys` holds the HMAC key material
/// - `Mailer` wraps a pooled SMTP transport
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Keys used to sign and verify access, refresh and email tokens.
    pub tokens: TokenKeys,

    /// Sends verification and password reset mail.
    pub mailer: Mailer,

    /// Signup only accepts addresses ending in `@{email_domain}`.
    pub email_domain: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token signing keys
    /// - `mailer` - Outgoing mail transport
    /// - `email_domain` - Institutional email domain
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenKeys,
        mailer: Mailer,
        email_domain: String,
    ) -> Self {
        Self {
            db,
            tokens,
            mailer,
            email_domain,
        }
    }

    /// State over a test database with a fixed secret and mail disabled.
    #[cfg(test)]
    pub fn for_test(db: DatabaseConnection) -> Self {
        use url::Url;

        Self::new(
            db,
            TokenKeys::new("test-secret"),
            Mailer::disabled(Url::parse("http://localhost:3000/").unwrap()),
            "cau.ac.kr".to_string(),
        )
    }
}

//! Signed tokens for sessions, email verification and password resets.
//!
//! Every token is an HS256 JWT carrying the account id, its email and a `kind`. A
//! token only verifies as the kind it was issued for, so a mailed verification
//! token can never be used as a session cookie.

use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::error::{auth::AuthError, AppError};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
    Email,
}

impl TokenKind {
    pub fn lifetime(&self) -> Duration {
        match self {
            Self::Access => Duration::hours(3),
            Self::Refresh => Duration::days(14),
            Self::Email => Duration::hours(24),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub id: Uuid,
    pub email: String,
    pub kind: TokenKind,
    pub exp: i64,
}

/// HMAC keys derived from the configured secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token with the standard lifetime for its kind.
    pub fn issue(&self, id: Uuid, email: &str, kind: TokenKind) -> Result<String, AppError> {
        self.issue_with_lifetime(id, email, kind, kind.lifetime())
    }

    /// Issues a token expiring `lifetime` from now. A negative lifetime yields an
    /// already expired token.
    pub fn issue_with_lifetime(
        &self,
        id: Uuid,
        email: &str,
        kind: TokenKind,
        lifetime: Duration,
    ) -> Result<String, AppError> {
        let claims = Claims {
            id,
            email: email.to_string(),
            kind,
            exp: (Utc::now() + lifetime).timestamp(),
        };

        Ok(jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &self.encoding,
        )?)
    }

    /// Verifies signature, expiry and kind.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and of the expected kind
    /// - `Err(AuthError::TokenExpired)` - Token expired
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed, or wrong kind
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        if data.claims.kind != kind {
            return Err(AuthError::InvalidToken);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_issued_token() {
        let keys = TokenKeys::new("secret");
        let id = Uuid::new_v4();
        let token = keys.issue(id, "a@cau.ac.kr", TokenKind::Access).unwrap();

        let claims = keys.verify(&token, TokenKind::Access).unwrap();
        assert_eq!(claims.id, id);
        assert_eq!(claims.email, "a@cau.ac.kr");
    }

    #[test]
    fn rejects_wrong_kind() {
        let keys = TokenKeys::new("secret");
        let token = keys
            .issue(Uuid::new_v4(), "a@cau.ac.kr", TokenKind::Email)
            .unwrap();

        assert!(matches!(
            keys.verify(&token, TokenKind::Access),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn reports_expired_token() {
        let keys = TokenKeys::new("secret");
        let token = keys
            .issue_with_lifetime(
                Uuid::new_v4(),
                "a@cau.ac.kr",
                TokenKind::Refresh,
                Duration::hours(-2),
            )
            .unwrap();

        assert!(matches!(
            keys.verify(&token, TokenKind::Refresh),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn rejects_foreign_signature() {
        let token = TokenKeys::new("one")
            .issue(Uuid::new_v4(), "a@cau.ac.kr", TokenKind::Access)
            .unwrap();

        assert!(matches!(
            TokenKeys::new("two").verify(&token, TokenKind::Access),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(
            TokenKeys::new("two").verify("garbage", TokenKind::Access),
            Err(AuthError::InvalidToken)
        ));
    }
}

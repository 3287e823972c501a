//! Account lifecycle: signup, email verification, login and logout, password reset,
//! and account deletion.

use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{
        bookmark::BookmarkRepository, study::StudyRepository, study_user::StudyUserRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::user::{AppliedStudy, CreateUserParams, LoginTokens, User},
    service::{
        mail::Mailer,
        token::{TokenKeys, TokenKind},
    },
    util::{
        parse::require_text,
        password::{hash_password, verify_password},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
    mailer: &'a Mailer,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys, mailer: &'a Mailer) -> Self {
        Self { db, tokens, mailer }
    }

    /// Registers a guest account and mails its verification link.
    ///
    /// The account exists once this returns even if the mail could not be delivered;
    /// delivery failures are logged.
    ///
    /// # Arguments
    /// - `email` - Institutional address
    /// - `password` - Plain text password, stored as an Argon2 hash
    /// - `email_domain` - Domain every address must belong to
    ///
    /// # Returns
    /// - `Ok(Uuid)` - Id of the new account
    /// - `Err(AppError::BadRequest)` - Missing field, foreign domain or taken address
    /// - `Err(AppError)` - Hashing, token or database failure
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        email_domain: &str,
    ) -> Result<Uuid, AppError> {
        let email = require_text(email, "email")?.to_lowercase();
        let password = require_text(password, "password")?;

        if !belongs_to_domain(&email, email_domain) {
            return Err(AppError::BadRequest(format!(
                "Email must be a @{} address",
                email_domain
            )));
        }

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest("Email is already registered".to_string()));
        }

        let id = Uuid::new_v4();
        let token = self.tokens.issue(id, &email, TokenKind::Email)?;

        let user = repo
            .create(CreateUserParams {
                id,
                email,
                password_hash: hash_password(&password)?,
                token: token.clone(),
            })
            .await?;

        if let Err(e) = self
            .mailer
            .send_verification(&user.email, user.id, &token)
            .await
        {
            tracing::warn!("Failed to send verification mail to {}: {}", user.email, e);
        }

        tracing::info!("Registered account {}", user.id);

        Ok(user.id)
    }

    /// Confirms an account from the mailed verification token.
    ///
    /// # Returns
    /// - `Ok(())` - Account promoted from `GUEST` to `USER`
    /// - `Err(AuthError::TokenExpired | InvalidToken)` - Token failed verification
    /// - `Err(AuthError::TokenMismatch)` - Token belongs to another account
    /// - `Err(AppError::NotFound)` - No unverified account with that id
    pub async fn verify_email(&self, id: Uuid, token: &str) -> Result<(), AppError> {
        let claims = self.tokens.verify(token.trim(), TokenKind::Email)?;
        if claims.id != id {
            return Err(AuthError::TokenMismatch(id).into());
        }

        let verified = UserRepository::new(self.db).verify_guest(id).await?;
        if verified == 0 {
            return Err(AppError::NotFound(
                "No unverified account with that id".to_string(),
            ));
        }

        Ok(())
    }

    /// Checks credentials and issues a session.
    ///
    /// Logging in clears the logout flag so the new tokens authenticate.
    ///
    /// # Returns
    /// - `Ok((User, LoginTokens))` - The account and its fresh access and refresh tokens
    /// - `Err(AppError::BadRequest)` - Missing email or password
    /// - `Err(AppError::NotFound)` - Unknown email
    /// - `Err(AuthError::InvalidCredentials)` - Wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, LoginTokens), AppError> {
        let email = require_text(email, "email")?.to_lowercase();
        let password = require_text(password, "password")?;

        let repo = UserRepository::new(self.db);
        let Some(mut user) = repo.find_by_email(&email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_password(&password, &user.password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        repo.set_logout(user.id, false).await?;
        user.is_logout = false;

        let tokens = LoginTokens {
            access_token: self.tokens.issue(user.id, &user.email, TokenKind::Access)?,
            refresh_token: self.tokens.issue(user.id, &user.email, TokenKind::Refresh)?,
        };

        Ok((user, tokens))
    }

    pub async fn logout(&self, id: Uuid) -> Result<(), AppError> {
        UserRepository::new(self.db).set_logout(id, true).await?;

        Ok(())
    }

    /// Deletes an account.
    ///
    /// Join requests and bookmarks go with the account through the cascade, so the seats
    /// and bookmark counts they hold on other studies are released first in the same
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - Account already gone
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let studies = StudyRepository::new(&txn);
        for study_id in StudyUserRepository::new(&txn)
            .get_accepted_study_ids(id)
            .await?
        {
            studies.free_seat(study_id).await?;
        }
        for study_id in BookmarkRepository::new(&txn)
            .get_study_ids_by_user(id)
            .await?
        {
            studies.decrement_bookmarks(study_id).await?;
        }

        let deleted = UserRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted > 0)
    }

    /// Starts a password reset by mailing a single-use link.
    ///
    /// # Arguments
    /// - `portal_id` - Local part of the institutional address
    /// - `email_domain` - Institutional domain
    ///
    /// # Returns
    /// - `Ok(())` - Token rotated and mail dispatched
    /// - `Err(AppError::BadRequest)` - Missing portal id
    /// - `Err(AppError::NotFound)` - No account with that address
    pub async fn request_password_reset(
        &self,
        portal_id: &str,
        email_domain: &str,
    ) -> Result<(), AppError> {
        let portal_id = require_text(portal_id, "portalId")?;
        let email = format!("{}@{}", portal_id, email_domain).to_lowercase();

        let repo = UserRepository::new(self.db);
        let Some(user) = repo.find_by_email(&email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let token = self.tokens.issue(user.id, &user.email, TokenKind::Email)?;
        repo.set_token(user.id, &token).await?;

        if let Err(e) = self.mailer.send_password_reset(&user.email, &token).await {
            tracing::warn!("Failed to send password reset mail to {}: {}", user.email, e);
        }

        Ok(())
    }

    /// Completes a password reset.
    ///
    /// The token must be the one most recently mailed to the account and must name the
    /// account's own email. The token is consumed on success.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::BadRequest)` - Missing field
    /// - `Err(AppError::NotFound)` - No account holds that token
    /// - `Err(AuthError)` - Token invalid, expired, or issued for another account
    pub async fn reset_password(
        &self,
        token: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AppError> {
        let token = require_text(token, "token")?;
        let email = require_text(email, "email")?.to_lowercase();
        let password = require_text(password, "password")?;

        let repo = UserRepository::new(self.db);
        let Some(user) = repo.find_by_token(&token).await? else {
            return Err(AppError::NotFound("No pending reset for this token".to_string()));
        };

        let claims = self.tokens.verify(&token, TokenKind::Email)?;
        if claims.id != user.id || claims.email != user.email || user.email != email {
            return Err(AuthError::TokenMismatch(user.id).into());
        }

        repo.update_password(user.id, &hash_password(&password)?)
            .await?;

        tracing::info!("Password reset for account {}", user.id);

        Ok(())
    }

    pub async fn get_applied_studies(&self, id: Uuid) -> Result<Vec<AppliedStudy>, AppError> {
        Ok(UserRepository::new(self.db).get_applied_studies(id).await?)
    }
}

/// Checks that an address is `local@domain` with a non-empty local part.
fn belongs_to_domain(email: &str, domain: &str) -> bool {
    match email.rsplit_once('@') {
        Some((local, host)) => {
            !local.is_empty() && !local.contains('@') && host.eq_ignore_ascii_case(domain)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::belongs_to_domain;

    #[test]
    fn accepts_only_institutional_addresses() {
        assert!(belongs_to_domain("student@cau.ac.kr", "cau.ac.kr"));
        assert!(belongs_to_domain("student@CAU.AC.KR", "cau.ac.kr"));
        assert!(!belongs_to_domain("@cau.ac.kr", "cau.ac.kr"));
        assert!(!belongs_to_domain("student@gmail.com", "cau.ac.kr"));
        assert!(!belongs_to_domain("student", "cau.ac.kr"));
        assert!(!belongs_to_domain("a@b@cau.ac.kr", "cau.ac.kr"));
    }
}

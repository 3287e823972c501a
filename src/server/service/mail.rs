//! Outgoing mail for account verification and password resets.
//!
//! Without SMTP credentials the mailer runs disabled and logs what it would have sent,
//! which keeps local development and tests free of a mail server.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use url::Url;
use uuid::Uuid;

use crate::server::{config::Config, error::AppError};

#[derive(Clone)]
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<Mailbox>,
    app_url: Url,
}

impl Mailer {
    /// Builds an SMTP mailer from configuration, or a disabled one when SMTP is not set.
    ///
    /// # Returns
    /// - `Ok(Mailer)` - Ready mailer
    /// - `Err(AppError::MailErr)` - SMTP relay could not be configured
    /// - `Err(AppError::MailAddressErr)` - Sender address is invalid
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let Some(smtp) = &config.smtp else {
            tracing::warn!("SMTP is not configured, outgoing mail will only be logged");
            return Ok(Self::disabled(config.app_url.clone()));
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
            .credentials(Credentials::new(
                smtp.username.clone(),
                smtp.password.clone(),
            ))
            .build();

        let from = config
            .mail_from
            .as_deref()
            .unwrap_or(&smtp.username)
            .parse::<Mailbox>()?;

        Ok(Self {
            transport: Some(transport),
            from: Some(from),
            app_url: config.app_url.clone(),
        })
    }

    pub fn disabled(app_url: Url) -> Self {
        Self {
            transport: None,
            from: None,
            app_url,
        }
    }

    /// Mails the link that confirms a new account.
    pub async fn send_verification(
        &self,
        to: &str,
        user_id: Uuid,
        token: &str,
    ) -> Result<(), AppError> {
        let link = self.verification_link(user_id, token)?;
        let body = format!(
            "Welcome! Confirm your account within 24 hours by opening the link below.\n\n{}\n",
            link
        );

        self.send(to, "Confirm your account", body).await
    }

    /// Mails the link that lets the user choose a new password.
    pub async fn send_password_reset(&self, to: &str, token: &str) -> Result<(), AppError> {
        let link = self.reset_link(token)?;
        let body = format!(
            "A password reset was requested for this account. The link below is valid for 24 hours.\n\n{}\n\nIf you did not request this, ignore this mail.\n",
            link
        );

        self.send(to, "Reset your password", body).await
    }

    fn verification_link(&self, user_id: Uuid, token: &str) -> Result<Url, AppError> {
        self.link(&format!("verify/{}/{}", user_id, token))
    }

    fn reset_link(&self, token: &str) -> Result<Url, AppError> {
        self.link(&format!("reset-password/{}", token))
    }

    fn link(&self, path: &str) -> Result<Url, AppError> {
        self.app_url
            .join(path)
            .map_err(|e| AppError::InternalError(format!("Failed to build mail link: {}", e)))
    }

    async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), AppError> {
        let (Some(transport), Some(from)) = (&self.transport, &self.from) else {
            tracing::info!("Mail disabled, '{}' to {}:\n{}", subject, to, body);
            return Ok(());
        };

        let message = Message::builder()
            .from(from.clone())
            .to(to.parse::<Mailbox>()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        transport.send(message).await?;
        tracing::debug!("Sent '{}' to {}", subject, to);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_mailer_accepts_mail() {
        let mailer = Mailer::disabled(Url::parse("http://localhost:3000/").unwrap());
        let id = Uuid::new_v4();

        let link = mailer.verification_link(id, "token").unwrap();
        assert_eq!(
            link.as_str(),
            format!("http://localhost:3000/verify/{}/token", id)
        );

        let result = mailer
            .send_verification("someone@cau.ac.kr", id, "token")
            .await;
        assert!(result.is_ok());
        assert!(mailer.send_password_reset("someone@cau.ac.kr", "token").await.is_ok());
    }

    #[test]
    fn builds_links_under_app_url() {
        let mailer = Mailer::disabled(Url::parse("http://localhost:3000/").unwrap());

        let link = mailer.reset_link("abc").unwrap();
        assert_eq!(link.as_str(), "http://localhost:3000/reset-password/abc");
    }
}

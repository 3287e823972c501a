use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_EMAIL_DOMAIN: &str = "cau.ac.kr";

/// SMTP credentials. Mail is only delivered when all three are configured.
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub app_url: Url,
    pub bind_addr: String,

    /// Institutional domain every signup address must belong to.
    pub email_domain: String,
    /// Accounts promoted to admin at startup.
    pub admin_emails: Vec<String>,
    pub cors_origin: Option<String>,

    pub smtp: Option<SmtpConfig>,
    pub mail_from: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = required("APP_URL")?;
        let app_url = Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        let smtp = match (
            optional("SMTP_HOST"),
            optional("SMTP_USERNAME"),
            optional("SMTP_PASSWORD"),
        ) {
            (Some(host), Some(username), Some(password)) => Some(SmtpConfig {
                host,
                username,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            app_url,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            email_domain: optional("EMAIL_DOMAIN")
                .unwrap_or_else(|| DEFAULT_EMAIL_DOMAIN.to_string()),
            admin_emails: optional("ADMIN_EMAILS")
                .map(|emails| {
                    emails
                        .split(',')
                        .map(|email| email.trim().to_lowercase())
                        .filter(|email| !email.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            cors_origin: optional("CORS_ORIGIN"),
            mail_from: optional("MAIL_FROM")
                .or_else(|| smtp.as_ref().map(|smtp| smtp.username.clone())),
            smtp,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

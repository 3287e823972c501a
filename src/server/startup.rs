use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up to date before the
/// server accepts requests. Migrations also seed the category table.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Grants the admin role to every account listed in `ADMIN_EMAILS`.
///
/// Accounts that do not exist yet are skipped, they are promoted on the next start
/// after they sign up.
pub async fn promote_admins(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if config.admin_emails.is_empty() {
        return Ok(());
    }

    let promoted = UserRepository::new(db)
        .promote_admins(&config.admin_emails)
        .await?;

    if promoted > 0 {
        tracing::info!("Promoted {} account(s) to admin", promoted);
    }

    Ok(())
}

/// Builds the CORS layer for the configured frontend origin.
///
/// Session cookies cross origins only with credentials allowed, which rules out a
/// wildcard origin. Without `CORS_ORIGIN` no cross-origin requests are allowed.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_origin else {
        return Ok(CorsLayer::new());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use thiserror::Error;

use super::AppConfig;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to connect to the database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Open the MySQL pool and bring the schema up to date.
pub async fn establish_connection(config: &AppConfig) -> Result<MySqlPool, DatabaseError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!("Successfully connected to the database");

    // Run migrations automatically on startup
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied successfully");

    Ok(pool)
}

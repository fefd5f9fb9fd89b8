use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use employee_api::config::{self, AppConfig};
use employee_api::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env file (if present)
    dotenv().ok();

    // Friendly check for required env before we attempt to connect
    let app_config = AppConfig::from_env()?;

    // Initialize tracing for structured logs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Establish database connection (and run migrations)
    let db_pool = config::database::establish_connection(&app_config).await?;

    let app = create_app(db_pool);
    let addr = app_config.socket_addr()?;

    tracing::info!("Listening on http://{}", addr);

    // Start the server and stop on ctrl-c
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

use agenda_server::api::{self, AppState};
use agenda_server::config::{self, AppConfig};
use agenda_server::errors::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    info!("Configuration loaded, binding on {}", app_config.bind_addr);

    // 4. Initialize database and ensure tables exist
    let db = config::database::connect(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|()| info!("Database tables ensured."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Build the router and serve
    let bind_addr = app_config.bind_addr;
    let state = AppState {
        db: Arc::new(db),
        config: Arc::new(app_config),
    };
    let app = api::router(state).layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("agenda-server listening on http://{bind_addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

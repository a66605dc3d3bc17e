use dotenvy::dotenv;
use fintrack::api::{self, AppState};
use fintrack::config::{Settings, database};
use fintrack::errors::Result;
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

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Load the application settings
    let settings = Settings::from_env()
        .inspect_err(|e| error!("Failed to load application settings: {e}"))?;
    info!("Successfully processed application configuration.");

    // 4. Connect to the store and make sure the schema exists
    let db = database::create_connection(&settings.database_url)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;
    database::create_tables(&db).await?;

    // 5. Run the HTTP server
    let app = api::router(AppState::new(db), &settings);
    let listener = tokio::net::TcpListener::bind(&settings.bind_addr).await?;
    info!("Listening on {}", settings.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

//! Changemaker API Server
//!
//! Serves the change-making engine over HTTP.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use changemaker_api::{AppState, create_router};
use changemaker_core::CurrencyConfigLoader;
use changemaker_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "changemaker=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let loader = CurrencyConfigLoader::new(config.currencies.dir.clone());
    info!(dir = %loader.dir().display(), "Currency documents configured");

    let app = create_router(AppState::new(loader));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! HTTP server entrypoint for the NyumbaPaeasy listings API

use tracing::info;
use tracing_subscriber::EnvFilter;

use nyumbapaeasy_api::api::{router, AppState};
use nyumbapaeasy_api::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! Morbyx Web Server
//!
//! Run with: cargo run -p morbyx-web

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use morbyx_config::AppConfig;
use morbyx_ingestion::{build_index, read_dataset};
use morbyx_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Morbyx...");

    let config = AppConfig::load_from_env()?;

    // Build the index once; it is read-only for the process lifetime.
    let rows = read_dataset(&config.dataset.path, config.dataset.row_cap)?;
    let index = build_index(&rows, &config.dataset.label_column);
    if index.is_empty() {
        warn!("Index is empty; every query will return no predictions");
    }

    let state = AppState::new(index, config.ranker.clone());
    let app = morbyx_web::router::build_router(state);

    let addr = config.server.bind_addr();
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

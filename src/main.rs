use hubnotify::{Config, ExecutionClient, NotificationStore, SessionTokens};

use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hubnotify=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hubnotify v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env();

    let session = SessionTokens::new();
    match &config.token {
        Some(token) => session.set(token.clone()),
        None => warn!("No WORKFLOWHUB_TOKEN set; the server will reject requests"),
    }

    let client = ExecutionClient::new(&config.api_url, config.request_timeout, session.clone());
    let store = NotificationStore::with_refresh_interval(
        Arc::new(client),
        config.refresh_interval,
    );

    info!("Syncing executions from {}", config.api_url);
    if let Err(err) = store.fetch_executions().await {
        warn!("Initial sync failed: {}", err);
    } else {
        let state = store.snapshot().await;
        info!(
            "Synced page {}/{} ({} unread)",
            state.current_page,
            state.total_pages,
            state.unread_count
        );
    }

    store.start_auto_refresh().await;

    tokio::signal::ctrl_c().await?;

    info!("Shutting down");
    store.stop_auto_refresh().await;

    Ok(())
}

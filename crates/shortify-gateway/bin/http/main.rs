mod cli;

use crate::cli::{StoreBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use shortify_core::Store;
use shortify_gateway::{App, AppState};
use shortify_redirector::RedirectorService;
use shortify_shortener::ShortenerService;
use shortify_storage::{InMemoryStore, RedisStore, RestStore, RestStoreSettings};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    shortify_telemetry::init(config.log_format.into()).context("failed to initialize logging")?;

    info!(
        listen_addr = %config.listen_addr,
        store_backend = %config.store,
        public_base_url = ?config.public_base_url.as_ref().map(Url::as_str),
        "starting gateway server"
    );

    let state = match config.store {
        StoreBackendArg::Rest => {
            if config.store_url.is_empty() || config.store_token.is_empty() {
                warn!("store url or token is empty, lookups will fall back and creation will fail");
            }
            let settings = RestStoreSettings::builder()
                .url(config.store_url)
                .token(config.store_token)
                .build();
            build_state(RestStore::new(settings), config.public_base_url)
        }
        StoreBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .context("redis url is required when store backend is redis")?;
            let store = RedisStore::connect(&redis_url)
                .await
                .context("failed to connect to redis")?;
            build_state(store, config.public_base_url)
        }
        StoreBackendArg::InMemory => build_state(InMemoryStore::new(), config.public_base_url),
    };

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("gateway stopped");
    Ok(())
}

fn build_state<S: Store>(store: S, public_base_url: Option<Url>) -> AppState {
    let store = Arc::new(store);
    AppState::new(
        Arc::new(ShortenerService::new(Arc::clone(&store))),
        Arc::new(RedirectorService::new(store)),
        public_base_url,
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

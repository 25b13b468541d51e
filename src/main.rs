//! Server entrypoint: configuration, tracing, session store, router.

use std::sync::Arc;
use std::time::Duration;

use listkeeper::adapters::http::{app_router, AppState};
use listkeeper::adapters::storage::InMemorySessionStore;
use listkeeper::config::AppConfig;
use listkeeper::ports::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = Arc::new(InMemorySessionStore::new(config.session.ttl()));
    spawn_session_sweeper(store.clone(), config.session.sweep_interval());

    let state = AppState {
        store: store as Arc<dyn SessionStore>,
        cookie_name: config.session.cookie_name.clone(),
    };
    let app = app_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listkeeper listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn spawn_session_sweeper(store: Arc<InMemorySessionStore>, interval: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            match store.sweep_expired().await {
                Ok(0) => {}
                Ok(dropped) => tracing::debug!(dropped, "expired sessions swept"),
                Err(error) => tracing::warn!(%error, "session sweep failed"),
            }
        }
    });
}

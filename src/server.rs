//! Service bootstrap: cache probe, listener bind, serve loop.

use tokio::net::TcpListener;
use tracing::info;

use crate::cache::CacheClient;
use crate::cart::{AppState, SharedState};
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::router::create_app_router;

/// Builds the cache client, probes it once and returns the shared state.
///
/// An unreachable cache is not an error here; only a malformed cache URL is.
pub async fn bootstrap(config: &Config) -> Result<SharedState> {
    let cache = CacheClient::open(&config.redis_url())?;
    let cache_status = cache.probe().await;
    Ok(AppState::new(cache, cache_status).shared())
}

/// Serves the application on an already bound listener until the process ends.
pub async fn serve(listener: TcpListener, state: SharedState) -> Result<()> {
    let app = create_app_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Runs the service with `config`. Returns only on a fatal error.
pub async fn run(config: Config) -> Result<()> {
    let state = bootstrap(&config).await?;

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })?;

    info!(port = config.port, "cart service listening");
    serve(listener, state).await
}

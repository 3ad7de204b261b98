// src/bin/api_server.rs

use player_registry::infra::logging;
use player_registry::transport::{self, http::AppState};
use player_registry::{storage, Config, PlayerService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = Config::from_env()?;

    // --- Store Initialization ---
    tracing::info!("Opening player store...");
    let store = storage::open(&config).await?;
    let app_state = AppState::new(PlayerService::new(store));

    // --- API Server Initialization ---
    let app = transport::http::build_app(app_state, &config.client_origin)
        .map_err(|e| anyhow::anyhow!("CLIENT_ORIGIN is not a valid origin: {}", e))?;
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("API server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);
    tracing::info!("Accepting browser requests from {}", config.client_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
            }
            tracing::info!("Shutdown signal received, stopping server");
        })
        .await?;

    Ok(())
}

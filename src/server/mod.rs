pub mod handlers;
pub mod types;

use crate::{config::Config, model::Artifacts, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router around the load-once artifacts.
pub fn router(artifacts: Arc<Artifacts>) -> Router {
    let state = handlers::AppState { artifacts };

    Router::new()
        .route("/", get(handlers::health).fallback(handlers::method_not_allowed))
        .route(
            "/predict",
            post(handlers::predict).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Load artifacts once before serving; missing files leave the server in
    // degraded mode rather than aborting.
    let artifacts = Arc::new(Artifacts::load(&config.artifacts).await);
    info!(
        "Artifacts: model {}, scaler {}",
        artifacts.model_status(),
        artifacts.scaler_status()
    );

    let app = router(artifacts);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

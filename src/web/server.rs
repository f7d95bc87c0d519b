use std::net::SocketAddr;

use axum::{
    Router,
    routing::{any, get},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use super::{services, state::AppState};
use crate::config::Config;

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All site routes. Anything unmatched is looked up in the public directory
/// and ends in the 404 page when absent there too.
pub fn router(state: AppState) -> Router {
    let missing = any(services::not_found).with_state(state.clone());
    let public = ServeDir::new(&state.config.content.public_dir).not_found_service(missing);

    Router::new()
        .route("/", get(services::home))
        .route("/about", get(services::about))
        .route("/work", get(services::work))
        .route("/work/{slug}", get(services::project))
        .route("/images/{*path}", get(services::image))
        .route("/health", get(services::health))
        .fallback_service(public)
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

pub async fn run(address: SocketAddr, config: Config) -> Result<(), AnyError> {
    info!(
        projects = %config.content.projects_dir.display(),
        public = %config.content.public_dir.display(),
        "Loading site"
    );
    let state = AppState::from_config(config)
        .await
        .map_err(|e| format!("Failed to load site: {e}"))?;

    let app = router(state);

    let listener = TcpListener::bind(address).await?;
    info!(%address, "Folio listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

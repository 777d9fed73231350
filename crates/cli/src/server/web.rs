use axum::Router;
use std::net::SocketAddr;
use tokio_util::sync::CancellationToken;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};
use wsrelay_api::{create_api_routes, middleware::layer_http_middleware, AppState};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    static_dir: &str,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        static_dir = %static_dir,
        "Starting web server"
    );

    let app = create_app(state, static_dir);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

fn create_app(state: AppState, static_dir: &str) -> Router {
    if !std::path::Path::new(static_dir).is_dir() {
        warn!(static_dir = %static_dir, "Static directory not found; only API routes will be served");
    }

    let router = create_api_routes(state.clone()).fallback_service(ServeDir::new(static_dir));

    layer_http_middleware(router, state)
        .layer(CompressionLayer::new().gzip(true))
        .layer(TraceLayer::new_for_http())
}

/// Resolves on Ctrl-C, cancelling the background jobs first.
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received");
    shutdown.cancel();
}

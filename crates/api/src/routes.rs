use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/ecowitt/report", post(handlers::ingest_report))
        .route("/latest", get(handlers::get_latest))
        .route("/latest/raw", get(handlers::get_latest_raw))
        .route("/wutoday", get(handlers::get_today))
        .route("/weekly", get(handlers::get_weekly))
        .route("/moon", get(handlers::get_moon))
        .route("/sunrise-sunset", get(handlers::get_sunrise_sunset))
        .route("/rss/{*feed}", get(handlers::get_rss_feed))
        .route("/stats", get(handlers::get_stats))
        .with_state(state)
}

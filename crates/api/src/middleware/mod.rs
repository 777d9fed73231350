pub mod cache_control;
pub mod stats;

pub use cache_control::cache_control;
pub use stats::{track_request_stats, EndpointSnapshot, RequestStats};

use crate::state::AppState;
use axum::{middleware::from_fn_with_state, Router};

/// Wraps `router` (routes and fallback included) with request statistics
/// outermost and Cache-Control headers inside it.
pub fn layer_http_middleware(router: Router, state: AppState) -> Router {
    router
        .layer(from_fn_with_state(state.clone(), cache_control))
        .layer(from_fn_with_state(state, track_request_stats))
}

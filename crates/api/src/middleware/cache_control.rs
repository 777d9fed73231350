use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::CACHE_CONTROL, HeaderValue},
    middleware::Next,
    response::Response,
};

pub async fn cache_control(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let max_age = state.http_cache.max_age_for(request.uri().path());
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", max_age)) {
        response.headers_mut().insert(CACHE_CONTROL, value);
    }

    response
}

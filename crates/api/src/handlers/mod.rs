pub mod feeds;
pub mod ingest;
pub mod observations;
pub mod sky;
pub mod stats;

pub use feeds::get_rss_feed;
pub use ingest::{get_latest, get_latest_raw, ingest_report};
pub use observations::{get_today, get_weekly};
pub use sky::{get_moon, get_sunrise_sunset};
pub use stats::get_stats;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

/// Serves an already-encoded upstream payload with `content_type`.
pub(crate) fn raw_body(content_type: &'static str, body: Bytes) -> Response {
    ([(CONTENT_TYPE, HeaderValue::from_static(content_type))], body).into_response()
}

use super::raw_body;
use crate::{errors::ApiError, state::AppState};
use axum::{
    extract::{Path, State},
    response::Response,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_rss_feed")]
pub async fn get_rss_feed(
    State(state): State<AppState>,
    Path(feed): Path<String>,
) -> Result<Response, ApiError> {
    let path = format!("/rss/{}", feed);
    let body = state.get_rss_feed.execute(&path).await?;

    debug!(path = %path, bytes = body.len(), "RSS feed served");
    Ok(raw_body("application/xml", body))
}

use crate::{errors::ApiError, state::AppState};
use axum::{
    extract::State,
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

pub const ACCEPTED_BODY: &str = "Data accepted for processing";

#[instrument(skip(state, body), name = "api_ingest_report", fields(bytes = body.len()))]
pub async fn ingest_report(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.ingest_report.execute(&body).await?;
    debug!("Station report queued for relay");

    Ok((StatusCode::ACCEPTED, ACCEPTED_BODY))
}

#[instrument(skip(state), name = "api_get_latest")]
pub async fn get_latest(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"))],
        Json(state.get_latest.execute()),
    )
}

#[instrument(skip(state), name = "api_get_latest_raw")]
pub async fn get_latest_raw(State(state): State<AppState>) -> Json<BTreeMap<String, String>> {
    Json(state.get_latest.execute())
}

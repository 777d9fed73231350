use super::raw_body;
use crate::{errors::ApiError, state::AppState};
use axum::{extract::State, response::Response};
use tracing::instrument;

#[instrument(skip(state), name = "api_get_moon")]
pub async fn get_moon(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = state.get_moon_phase.execute().await?;
    Ok(raw_body("application/json", body))
}

#[instrument(skip(state), name = "api_get_sunrise_sunset")]
pub async fn get_sunrise_sunset(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = state.get_sunrise_sunset.execute().await?;
    Ok(raw_body("application/json", body))
}

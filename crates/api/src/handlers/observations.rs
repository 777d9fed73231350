use crate::{errors::ApiError, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};
use wsrelay_domain::{DailySummary, WeeklyHistory};

#[instrument(skip(state), name = "api_get_today")]
pub async fn get_today(State(state): State<AppState>) -> Result<Json<DailySummary>, ApiError> {
    let summary = state.get_daily_summary.execute().await?;

    debug!(
        observations = summary.all_observations.len(),
        "Daily summary assembled"
    );

    Ok(Json(summary))
}

#[instrument(skip(state), name = "api_get_weekly")]
pub async fn get_weekly(State(state): State<AppState>) -> Result<Json<WeeklyHistory>, ApiError> {
    let history = state.get_weekly_history.execute().await?;
    Ok(Json(history))
}

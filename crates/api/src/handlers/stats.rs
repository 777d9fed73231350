use crate::{
    dto::{EndpointStatsResponse, ProgramStatsResponse, StatsResponse},
    state::AppState,
};
use axum::{extract::State, Json};
use tracing::instrument;

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let endpoints = state
        .stats
        .snapshot()
        .into_iter()
        .map(|(path, snapshot)| (path, EndpointStatsResponse::from(snapshot)))
        .collect();

    Json(StatsResponse {
        endpoints,
        program: ProgramStatsResponse {
            uptime_secs: state.stats.uptime().as_secs(),
            upstream_fetches: state.cache.upstream_fetches(),
            cached_entries: state.cache.store().len(),
        },
    })
}

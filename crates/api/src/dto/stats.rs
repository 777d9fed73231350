use crate::middleware::EndpointSnapshot;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Serialize, Debug, Clone)]
pub struct StatsResponse {
    pub endpoints: BTreeMap<String, EndpointStatsResponse>,
    pub program: ProgramStatsResponse,
}

#[derive(Serialize, Debug, Clone)]
pub struct EndpointStatsResponse {
    pub hits: u64,
    pub average_response_time_ms: f64,
    pub slowest_response_time_ms: f64,
}

impl From<EndpointSnapshot> for EndpointStatsResponse {
    fn from(snapshot: EndpointSnapshot) -> Self {
        Self {
            hits: snapshot.hits,
            average_response_time_ms: millis(snapshot.average),
            slowest_response_time_ms: millis(snapshot.slowest),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ProgramStatsResponse {
    pub uptime_secs: u64,
    pub upstream_fetches: u64,
    pub cached_entries: usize,
}

fn millis(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1_000.0 * 100.0).round() / 100.0
}

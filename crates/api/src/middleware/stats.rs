use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use wsrelay_domain::config::http_cache::is_static_asset;

#[derive(Default)]
struct EndpointCounters {
    hits: AtomicU64,
    total_nanos: AtomicU64,
    slowest_nanos: AtomicU64,
}

impl EndpointCounters {
    fn observe(&self, nanos: u64) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        self.total_nanos.fetch_add(nanos, Ordering::Relaxed);
        self.slowest_nanos.fetch_max(nanos, Ordering::Relaxed);
    }

    fn snapshot(&self) -> EndpointSnapshot {
        let hits = self.hits.load(Ordering::Relaxed);
        let total = self.total_nanos.load(Ordering::Relaxed);
        let average = if hits > 0 { total / hits } else { 0 };

        EndpointSnapshot {
            hits,
            average: Duration::from_nanos(average),
            slowest: Duration::from_nanos(self.slowest_nanos.load(Ordering::Relaxed)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSnapshot {
    pub hits: u64,
    pub average: Duration,
    pub slowest: Duration,
}

/// Per-path request counters plus process uptime.
pub struct RequestStats {
    endpoints: DashMap<String, EndpointCounters>,
    started_at: Instant,
}

impl Default for RequestStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestStats {
    pub fn new() -> Self {
        Self {
            endpoints: DashMap::new(),
            started_at: Instant::now(),
        }
    }

    pub fn record(&self, path: &str, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);

        if let Some(counters) = self.endpoints.get(path) {
            counters.observe(nanos);
            return;
        }

        self.endpoints
            .entry(path.to_string())
            .or_default()
            .observe(nanos);
    }

    /// Counters for every path seen so far, ordered by path.
    pub fn snapshot(&self) -> BTreeMap<String, EndpointSnapshot> {
        self.endpoints
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().snapshot()))
            .collect()
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

pub async fn track_request_stats(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if is_static_asset(&path) {
        return next.run(request).await;
    }

    let started = Instant::now();
    let response = next.run(request).await;
    state.stats.record(&path, started.elapsed());

    response
}

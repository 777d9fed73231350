use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use wsrelay_application::use_cases::{GetTodayObservationsUseCase, GetWeeklyHistoryUseCase};

const DEFAULT_INTERVAL_SECS: u64 = 120;

/// Keeps today's observations and the weekly history warm.
pub struct ObservationsPrefetchJob {
    today: Arc<GetTodayObservationsUseCase>,
    weekly: Arc<GetWeeklyHistoryUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ObservationsPrefetchJob {
    pub fn new(
        today: Arc<GetTodayObservationsUseCase>,
        weekly: Arc<GetWeeklyHistoryUseCase>,
    ) -> Self {
        Self {
            today,
            weekly,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting observations prefetch job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("ObservationsPrefetchJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_once().await;
                    }
                }
            }
        });
    }

    /// One prefetch cycle; failures are logged and the other half still runs.
    pub async fn run_once(&self) {
        match self.today.execute().await {
            Ok(set) => debug!(records = set.records.len(), "Today's observations prefetched"),
            Err(e) => error!(error = %e, "Prefetching today's observations failed"),
        }

        match self.weekly.execute().await {
            Ok(_) => debug!("Weekly history prefetched"),
            Err(e) => error!(error = %e, "Prefetching weekly history failed"),
        }
    }
}

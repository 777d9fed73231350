use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use wsrelay_application::use_cases::GetMoonPhaseUseCase;

const DEFAULT_INTERVAL_SECS: u64 = 3600;

/// Replaces the cached moon report every interval, fresh or not.
pub struct MoonPrefetchJob {
    moon: Arc<GetMoonPhaseUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl MoonPrefetchJob {
    pub fn new(moon: Arc<GetMoonPhaseUseCase>) -> Self {
        Self {
            moon,
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
        info!(interval_secs = self.interval_secs, "Starting moon prefetch job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("MoonPrefetchJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.moon.refresh().await {
                            Ok(_) => info!("Moon data prefetched"),
                            Err(e) => error!(error = %e, "Prefetching moon data failed"),
                        }
                    }
                }
            }
        });
    }
}

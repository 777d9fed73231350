use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use wsrelay_application::use_cases::GetSunriseSunsetUseCase;

const DEFAULT_INTERVAL_SECS: u64 = 300;

pub struct SunPrefetchJob {
    sun: Arc<GetSunriseSunsetUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl SunPrefetchJob {
    pub fn new(sun: Arc<GetSunriseSunsetUseCase>) -> Self {
        Self {
            sun,
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
            "Starting sunrise-sunset prefetch job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("SunPrefetchJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.sun.execute().await {
                            Ok(_) => debug!("Sunrise-sunset data prefetched"),
                            Err(e) => error!(error = %e, "Prefetching sunrise-sunset data failed"),
                        }
                    }
                }
            }
        });
    }
}

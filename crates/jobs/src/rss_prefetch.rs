use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use wsrelay_application::use_cases::GetRssFeedUseCase;

const DEFAULT_INTERVAL_SECS: u64 = 900;

pub struct RssPrefetchJob {
    feeds: Arc<GetRssFeedUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RssPrefetchJob {
    pub fn new(feeds: Arc<GetRssFeedUseCase>) -> Self {
        Self {
            feeds,
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
        info!(interval_secs = self.interval_secs, "Starting RSS prefetch job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("RssPrefetchJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_once().await;
                    }
                }
            }
        });
    }

    /// Prefetches every configured feed; one failing feed does not stop the rest.
    pub async fn run_once(&self) {
        let mut failed = 0usize;
        for path in self.feeds.feed_paths() {
            if let Err(e) = self.feeds.execute(path).await {
                failed += 1;
                error!(feed = path, error = %e, "Prefetching RSS feed failed");
            }
        }
        debug!(failed, "RSS prefetch cycle completed");
    }
}

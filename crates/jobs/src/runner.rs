use crate::{MoonPrefetchJob, ObservationsPrefetchJob, RssPrefetchJob, SunPrefetchJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(ObservationsPrefetchJob);
impl_spawnable_job!(MoonPrefetchJob);
impl_spawnable_job!(RssPrefetchJob);
impl_spawnable_job!(SunPrefetchJob);

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job();
    }
}

/// Starts the prefetch schedulers, one independent task per resource family.
pub struct JobRunner {
    observations: Option<ObservationsPrefetchJob>,
    moon: Option<MoonPrefetchJob>,
    rss: Option<RssPrefetchJob>,
    sun: Option<SunPrefetchJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            observations: None,
            moon: None,
            rss: None,
            sun: None,
            shutdown: None,
        }
    }

    pub fn with_observations_prefetch(mut self, job: ObservationsPrefetchJob) -> Self {
        self.observations = Some(job);
        self
    }

    pub fn with_moon_prefetch(mut self, job: MoonPrefetchJob) -> Self {
        self.moon = Some(job);
        self
    }

    pub fn with_rss_prefetch(mut self, job: RssPrefetchJob) -> Self {
        self.rss = Some(job);
        self
    }

    pub fn with_sun_prefetch(mut self, job: SunPrefetchJob) -> Self {
        self.sun = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        spawn_job(self.observations, &self.shutdown);
        spawn_job(self.moon, &self.shutdown);
        spawn_job(self.rss, &self.shutdown);
        spawn_job(self.sun, &self.shutdown);

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

use super::UseCases;
use wsrelay_domain::Config;
use wsrelay_jobs::{
    JobRunner, MoonPrefetchJob, ObservationsPrefetchJob, RssPrefetchJob, SunPrefetchJob,
};

pub fn build_job_runner(config: &Config, use_cases: &UseCases) -> JobRunner {
    let prefetch = &config.prefetch;

    JobRunner::new()
        .with_observations_prefetch(
            ObservationsPrefetchJob::new(
                use_cases.get_today.clone(),
                use_cases.get_weekly_history.clone(),
            )
            .with_interval(prefetch.observations_interval_secs),
        )
        .with_moon_prefetch(
            MoonPrefetchJob::new(use_cases.get_moon_phase.clone())
                .with_interval(prefetch.moon_interval_secs),
        )
        .with_rss_prefetch(
            RssPrefetchJob::new(use_cases.get_rss_feed.clone())
                .with_interval(prefetch.rss_interval_secs),
        )
        .with_sun_prefetch(
            SunPrefetchJob::new(use_cases.get_sunrise_sunset.clone())
                .with_interval(prefetch.sun_interval_secs),
        )
}

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use wsrelay_application::ports::{
    AstronomySource, FeedSource, ObservationSource, RelayClient, RelayQueuePort, SunTimesSource,
    SystemClock,
};
use wsrelay_application::services::ReadThroughCache;
use wsrelay_domain::{Config, DomainError, RelayJob};
use wsrelay_infrastructure::cache::TtlCacheStore;
use wsrelay_infrastructure::http::{
    build_http_client, AstronomyApiClient, RssFeedClient, SunriseSunsetClient, WeatherComClient,
};
use wsrelay_infrastructure::relay::{RelayQueue, WundergroundRelayClient};

/// Infrastructure shared by every use case.
pub struct Services {
    pub cache: Arc<ReadThroughCache>,
    pub observations: Arc<dyn ObservationSource>,
    pub astronomy: Arc<dyn AstronomySource>,
    pub sun_times: Arc<dyn SunTimesSource>,
    pub feeds: Arc<dyn FeedSource>,
    pub relay_queue: Arc<dyn RelayQueuePort>,
    pub relay_receiver: mpsc::Receiver<RelayJob>,
    pub relay_client: Arc<dyn RelayClient>,
}

impl Services {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let client = build_http_client(config.upstream.timeout_secs)?;

        let clock = Arc::new(SystemClock);
        let store = Arc::new(TtlCacheStore::new(clock.clone()));
        let cache = Arc::new(ReadThroughCache::new(store, clock));

        let (relay_queue, relay_receiver) = RelayQueue::new(config.relay.queue_capacity);
        info!(
            capacity = relay_queue.capacity(),
            url = %config.relay.url,
            "Relay queue created"
        );

        Ok(Self {
            cache,
            observations: Arc::new(WeatherComClient::new(
                client.clone(),
                &config.upstream,
                &config.station,
            )),
            astronomy: Arc::new(AstronomyApiClient::new(
                client.clone(),
                &config.upstream,
                &config.station,
            )),
            sun_times: Arc::new(SunriseSunsetClient::new(client.clone(), &config.upstream)),
            feeds: Arc::new(RssFeedClient::new(client.clone())),
            relay_queue: Arc::new(relay_queue),
            relay_receiver,
            relay_client: Arc::new(WundergroundRelayClient::new(client, config.relay.url.clone())),
        })
    }
}

mod clock;
mod feed_source;
mod observation_source;
mod relay;
mod sky_source;
mod ttl_cache;

pub use clock::{Clock, SystemClock};
pub use feed_source::FeedSource;
pub use observation_source::ObservationSource;
pub use relay::{RelayClient, RelayQueuePort};
pub use sky_source::{AstronomySource, SunTimesSource};
pub use ttl_cache::TtlCachePort;

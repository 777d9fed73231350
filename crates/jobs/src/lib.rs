pub mod moon_prefetch;
pub mod observations_prefetch;
pub mod rss_prefetch;
pub mod runner;
pub mod sun_prefetch;

pub use moon_prefetch::MoonPrefetchJob;
pub use observations_prefetch::ObservationsPrefetchJob;
pub use rss_prefetch::RssPrefetchJob;
pub use runner::JobRunner;
pub use sun_prefetch::SunPrefetchJob;

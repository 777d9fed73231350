mod latest_data;
mod read_through;
mod smoother;

pub use latest_data::LatestDataStore;
pub use read_through::{Fetched, ReadThroughCache};
pub use smoother::{MetricSmoothers, SmoothedMetric, Smoother, SMOOTHING_WINDOW};

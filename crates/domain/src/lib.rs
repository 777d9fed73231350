//! wsrelay domain layer
pub mod cache_entry;
pub mod config;
pub mod errors;
pub mod extremes;
pub mod history;
pub mod moon;
pub mod observation;
pub mod relay_job;
pub mod resource;
pub mod station_report;
pub mod weather_math;

pub use cache_entry::{CacheEntry, CacheLookup};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use extremes::{DailySummary, ExtremesAccumulator};
pub use history::WeeklyHistory;
pub use moon::{MoonPhase, MoonReport};
pub use observation::{Observation, ObservationSet, StationPosition, Units};
pub use relay_job::RelayJob;
pub use resource::CacheKey;
pub use station_report::StationReport;

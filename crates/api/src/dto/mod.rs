pub mod stats;

pub use stats::{EndpointStatsResponse, ProgramStatsResponse, StatsResponse};

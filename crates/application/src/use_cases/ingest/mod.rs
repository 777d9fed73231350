pub mod get_latest_data;
pub mod ingest_station_report;

pub use get_latest_data::GetLatestDataUseCase;
pub use ingest_station_report::{IngestStationReportUseCase, RelayCredentials};

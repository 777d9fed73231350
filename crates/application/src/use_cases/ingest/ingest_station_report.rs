use crate::ports::RelayQueuePort;
use crate::services::{LatestDataStore, MetricSmoothers, SmoothedMetric};
use std::sync::Arc;
use tracing::{debug, instrument};
use wsrelay_domain::config::StationConfig;
use wsrelay_domain::weather_math::{celsius_to_fahrenheit, dew_point_celsius, fahrenheit_to_celsius};
use wsrelay_domain::{DomainError, RelayJob, StationReport};

/// Calibration applied to the smoothed UV and solar radiation readings.
pub const SENSOR_CORRECTION: f64 = 0.94;

/// Fields copied verbatim from the station report, as (relay key, report key).
const PASS_THROUGH: [(&str, &str); 13] = [
    ("dateutc", "dateutc"),
    ("windgustmph", "windgustmph"),
    ("winddir", "winddir"),
    ("baromin", "baromrelin"),
    ("absbaromin", "baromabsin"),
    ("rainin", "rainratein"),
    ("dailyrainin", "dailyrainin"),
    ("weeklyrainin", "weeklyrainin"),
    ("monthlyrainin", "monthlyrainin"),
    ("yearlyrainin", "yearlyrainin"),
    ("indoortempf", "tempinf"),
    ("indoorhumidity", "humidityin"),
    ("rtfreq", "interval"),
];

/// Account the relay posts under.
#[derive(Debug, Clone, Default)]
pub struct RelayCredentials {
    pub station_id: String,
    pub password: String,
    pub software: String,
}

impl From<&StationConfig> for RelayCredentials {
    fn from(station: &StationConfig) -> Self {
        Self {
            station_id: station.station_id.clone(),
            password: station.password.clone(),
            software: station.software.clone(),
        }
    }
}

/// Turns one station submission into a relay record and queues it.
///
/// Delivery is not awaited: a successful return only means the record is on
/// the queue.
pub struct IngestStationReportUseCase {
    smoothers: Arc<MetricSmoothers>,
    latest: Arc<LatestDataStore>,
    queue: Arc<dyn RelayQueuePort>,
    credentials: RelayCredentials,
}

impl IngestStationReportUseCase {
    pub fn new(
        smoothers: Arc<MetricSmoothers>,
        latest: Arc<LatestDataStore>,
        queue: Arc<dyn RelayQueuePort>,
        credentials: RelayCredentials,
    ) -> Self {
        Self {
            smoothers,
            latest,
            queue,
            credentials,
        }
    }

    #[instrument(skip(self, body), fields(bytes = body.len()))]
    pub async fn execute(&self, body: &[u8]) -> Result<(), DomainError> {
        let report = StationReport::parse(body)?;
        let job = self.build_job(&report);

        self.latest.replace(report.into_fields());

        // Waits here while the queue is full.
        self.queue.enqueue(job).await?;
        debug!("Station report queued for relay");

        Ok(())
    }

    /// Converts a parsed report into the upstream record. Advances the
    /// smoothing windows as a side effect.
    pub fn build_job(&self, report: &StationReport) -> RelayJob {
        let temp_c = fahrenheit_to_celsius(report.temp_f);
        let dew_point_f = celsius_to_fahrenheit(dew_point_celsius(temp_c, report.humidity));

        let uv = self.smoothers.smooth(SmoothedMetric::Uv, report.uv);
        let solar = self
            .smoothers
            .smooth(SmoothedMetric::SolarRadiation, report.solar_radiation);

        let corrected_uv = (uv * SENSOR_CORRECTION).round();
        let corrected_solar = solar * SENSOR_CORRECTION;

        let mut job = RelayJob::new();
        job.set("ID", self.credentials.station_id.as_str())
            .set("PASSWORD", self.credentials.password.as_str())
            .set("tempf", report.get("tempf"))
            .set("humidity", report.get("humidity"))
            .set("dewptf", format!("{:.2}", dew_point_f))
            .set("windspeedmph", format!("{:.2}", report.wind_speed_mph))
            .set("solarradiation", format!("{:.2}", corrected_solar))
            .set("UV", format!("{}", corrected_uv as i64));

        for (relay_key, report_key) in PASS_THROUGH {
            job.set(relay_key, report.get(report_key));
        }

        job.set("softwaretype", self.credentials.software.as_str())
            .set("realtime", "1")
            .set("action", "updateraw");

        job
    }
}

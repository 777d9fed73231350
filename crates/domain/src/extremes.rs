use crate::observation::{Observation, ObservationSet};
use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;

const HIGH_SENTINEL: f64 = -9999.0;
const LOW_SENTINEL: f64 = 9999.0;

/// Running max/min for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extreme {
    pub high: f64,
    pub low: f64,
}

impl Default for Extreme {
    fn default() -> Self {
        Self {
            high: HIGH_SENTINEL,
            low: LOW_SENTINEL,
        }
    }
}

impl Extreme {
    fn observe(&mut self, high: Option<f64>, low: Option<f64>) {
        if let Some(high) = high {
            if high > self.high {
                self.high = high;
            }
        }
        if let Some(low) = low {
            if low < self.low {
                self.low = low;
            }
        }
    }
}

/// Per-request fold of the day's records into daily highs and lows.
///
/// Seeded with sentinels so the first real value always wins; a metric no
/// record reports keeps its sentinel.
#[derive(Debug, Clone, Default)]
pub struct ExtremesAccumulator {
    pub temp: Extreme,
    pub windspeed: Extreme,
    pub windgust: Extreme,
    pub dewpt: Extreme,
    pub pressure: Extreme,
    pub humidity: Extreme,
    pub uv: Extreme,
    pub solar_radiation: Extreme,
    latest: Option<Observation>,
}

impl ExtremesAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, obs: &Observation) {
        let imperial = &obs.imperial;
        self.temp.observe(imperial.temp_high, imperial.temp_low);
        self.windspeed
            .observe(imperial.windspeed_high, imperial.windspeed_low);
        self.windgust
            .observe(imperial.windgust_high, imperial.windgust_low);
        self.dewpt.observe(imperial.dewpt_high, imperial.dewpt_low);
        self.pressure
            .observe(imperial.pressure_max, imperial.pressure_min);
        self.humidity.observe(obs.humidity_high, obs.humidity_low);
        self.uv.observe(obs.uv_high, None);
        self.solar_radiation.observe(obs.solar_radiation_high, None);

        let newer = self
            .latest
            .as_ref()
            .is_none_or(|latest| obs.epoch_secs() > latest.epoch_secs());
        if newer {
            self.latest = Some(obs.clone());
        }
    }

    pub fn fold<'a>(records: impl IntoIterator<Item = &'a Observation>) -> Self {
        let mut acc = Self::new();
        for obs in records {
            acc.observe(obs);
        }
        acc
    }

    /// Record with the greatest epoch seen so far.
    pub fn latest(&self) -> Option<&Observation> {
        self.latest.as_ref()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImperialExtremes {
    pub temp_high: f64,
    pub temp_low: f64,
    pub windspeed_high: f64,
    pub windspeed_low: f64,
    pub windgust_high: f64,
    pub windgust_low: f64,
    pub dewpt_high: f64,
    pub dewpt_low: f64,
    pub pressure_max: f64,
    pub pressure_min: f64,
}

/// Synthesised "daily history" record for today.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHistoryRecord {
    #[serde(rename = "stationID")]
    pub station_id: String,
    pub tz: Option<String>,
    pub obs_time_utc: String,
    pub obs_time_local: String,
    pub epoch: i64,
    pub qc_status: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub imperial: ImperialExtremes,
    pub humidity_high: f64,
    pub humidity_low: f64,
    pub uv_high: f64,
    pub solar_radiation_high: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyHistory {
    pub observations: Vec<DailyHistoryRecord>,
}

/// Body of the "today" endpoint: the extremes envelope plus every raw record.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    #[serde(rename = "dailyHistory")]
    pub daily_history: DailyHistory,
    #[serde(rename = "allObservations")]
    pub all_observations: Vec<Value>,
}

impl DailySummary {
    /// Builds the summary for `set`. With no records, the envelope is empty
    /// and only the (empty) raw list is returned.
    pub fn build(station_id: &str, set: ObservationSet) -> Self {
        let acc = ExtremesAccumulator::fold(&set.records);

        let observations = acc
            .latest()
            .map(|latest| vec![acc.record_for(station_id, latest)])
            .unwrap_or_default();

        Self {
            daily_history: DailyHistory { observations },
            all_observations: set.raw,
        }
    }
}

impl ExtremesAccumulator {
    fn record_for(&self, station_id: &str, latest: &Observation) -> DailyHistoryRecord {
        let epoch = latest.epoch_secs();
        let at = DateTime::<Utc>::from_timestamp(epoch, 0).unwrap_or_default();
        let tz = latest.timezone().unwrap_or(Tz::UTC);

        DailyHistoryRecord {
            station_id: station_id.to_string(),
            tz: latest.tz.clone(),
            obs_time_utc: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            obs_time_local: at.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S").to_string(),
            epoch,
            qc_status: latest.qc_status.unwrap_or_default(),
            lat: latest.lat,
            lon: latest.lon,
            imperial: ImperialExtremes {
                temp_high: self.temp.high,
                temp_low: self.temp.low,
                windspeed_high: self.windspeed.high,
                windspeed_low: self.windspeed.low,
                windgust_high: self.windgust.high,
                windgust_low: self.windgust.low,
                dewpt_high: self.dewpt.high,
                dewpt_low: self.dewpt.low,
                pressure_max: self.pressure.high,
                pressure_min: self.pressure.low,
            },
            humidity_high: self.humidity.high,
            humidity_low: self.humidity.low,
            uv_high: self.uv.high,
            solar_radiation_high: self.solar_radiation.high,
        }
    }
}

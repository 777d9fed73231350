use crate::errors::DomainError;
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;

/// Unit system requested from the observations API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Imperial,
    Metric,
}

impl Units {
    /// Query-string code understood by the observations API.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Imperial => "e",
            Self::Metric => "m",
        }
    }
}

/// Imperial high/low block of a 1-day observation record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImperialReadings {
    pub temp_high: Option<f64>,
    pub temp_low: Option<f64>,
    pub windspeed_high: Option<f64>,
    pub windspeed_low: Option<f64>,
    pub windgust_high: Option<f64>,
    pub windgust_low: Option<f64>,
    pub dewpt_high: Option<f64>,
    pub dewpt_low: Option<f64>,
    pub pressure_max: Option<f64>,
    pub pressure_min: Option<f64>,
}

/// The fields of one observation record that the relay actually reads.
///
/// Everything else in the record is passed through to clients untouched via
/// the raw JSON kept alongside in [`ObservationSet`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    #[serde(default)]
    pub epoch: f64,
    pub qc_status: Option<i64>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub tz: Option<String>,
    pub humidity_high: Option<f64>,
    pub humidity_low: Option<f64>,
    pub uv_high: Option<f64>,
    pub solar_radiation_high: Option<f64>,
    #[serde(default)]
    pub imperial: ImperialReadings,
}

impl Observation {
    pub fn epoch_secs(&self) -> i64 {
        self.epoch as i64
    }

    pub fn timezone(&self) -> Option<Tz> {
        self.tz.as_deref().and_then(|tz| tz.parse().ok())
    }

    pub fn position(&self) -> Option<StationPosition> {
        Some(StationPosition {
            latitude: self.lat?,
            longitude: self.lon?,
            timezone: self.timezone(),
        })
    }
}

/// Where the station is, as reported by its own observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<Tz>,
}

impl StationPosition {
    pub fn timezone_or_utc(&self) -> Tz {
        self.timezone.unwrap_or(Tz::UTC)
    }
}

#[derive(Deserialize)]
struct ObservationsEnvelope {
    observations: Vec<Value>,
}

/// A decoded observations payload: the raw records for pass-through plus the
/// typed view of each.
#[derive(Debug, Clone, Default)]
pub struct ObservationSet {
    pub raw: Vec<Value>,
    pub records: Vec<Observation>,
}

impl ObservationSet {
    /// Decodes an `{"observations": [...]}` body.
    pub fn decode(body: &[u8]) -> Result<Self, DomainError> {
        let envelope: ObservationsEnvelope = serde_json::from_slice(body)
            .map_err(|e| DomainError::upstream("observations", e))?;

        let records = envelope
            .observations
            .iter()
            .map(|raw| serde_json::from_value::<Observation>(raw.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::upstream("observations", e))?;

        Ok(Self {
            raw: envelope.observations,
            records,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last record in upstream order, which the API reports chronologically.
    pub fn latest(&self) -> Option<&Observation> {
        self.records.last()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.records.first()
    }

    /// Station position taken from the most recent record.
    pub fn station_position(&self) -> Result<StationPosition, DomainError> {
        self.latest()
            .and_then(Observation::position)
            .ok_or_else(|| {
                DomainError::upstream("observations", "no observation with coordinates available")
            })
    }
}

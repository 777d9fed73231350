use crate::errors::DomainError;
use std::collections::BTreeMap;

/// One telemetry submission from the station, as posted in an
/// `application/x-www-form-urlencoded` body.
///
/// The five fields the relay computes with are parsed up front; any failure
/// rejects the whole report. Every other field is kept verbatim for
/// pass-through.
#[derive(Debug, Clone, PartialEq)]
pub struct StationReport {
    pub uv: f64,
    pub solar_radiation: f64,
    pub temp_f: f64,
    pub humidity: f64,
    pub wind_speed_mph: f64,
    fields: BTreeMap<String, String>,
}

impl StationReport {
    pub fn parse(body: &[u8]) -> Result<Self, DomainError> {
        let text = std::str::from_utf8(body)
            .map_err(|_| DomainError::InvalidReport("can't read body".to_string()))?;

        if has_malformed_escape(text) {
            return Err(DomainError::InvalidReport("can't parse body".to_string()));
        }

        let mut fields = BTreeMap::new();
        for (key, value) in url::form_urlencoded::parse(text.as_bytes()) {
            // first occurrence wins
            fields
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }

        Ok(Self {
            uv: required(&fields, "uv", "UV")?,
            solar_radiation: required(&fields, "solarradiation", "solar radiation")?,
            temp_f: required(&fields, "tempf", "temperature")?,
            humidity: required(&fields, "humidity", "humidity")?,
            wind_speed_mph: required(&fields, "windspeedmph", "wind speed")?,
            fields,
        })
    }

    /// Raw value of `key`, or the empty string when absent.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

fn required(fields: &BTreeMap<String, String>, key: &str, label: &str) -> Result<f64, DomainError> {
    fields
        .get(key)
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or_else(|| DomainError::InvalidReport(format!("can't parse {} value", label)))
}

/// `%` not followed by two hex digits.
fn has_malformed_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}

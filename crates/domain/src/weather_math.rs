//! Unit conversions and the dew point approximation used by the relay.

const MAGNUS_A: f64 = 17.27;
const MAGNUS_B: f64 = 237.7;

pub fn fahrenheit_to_celsius(temp_f: f64) -> f64 {
    (temp_f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 9.0 / 5.0 + 32.0
}

/// Dew point in °C from air temperature (°C) and relative humidity (%),
/// using the Magnus formula.
///
/// Humidity of 0 yields `-inf` inside the logarithm; the result is not
/// clamped and propagates as-is.
pub fn dew_point_celsius(temp_c: f64, humidity: f64) -> f64 {
    let alpha = (MAGNUS_A * temp_c) / (MAGNUS_B + temp_c) + (humidity / 100.0).ln();
    (MAGNUS_B * alpha) / (MAGNUS_A - alpha)
}

use serde::{Serialize, Serializer};
use std::f64::consts::PI;
use std::fmt;

/// One of the eight named lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Maps a phase angle in degrees to a named phase.
    ///
    /// The angle is normalised into `[0, 360)`. New Moon spans the wrap-around
    /// `[350, 360) ∪ [0, 10]`; the quarters and Full Moon are closed 20° windows
    /// centred on 90°, 180° and 270°; the crescents and gibbous phases fill
    /// the open gaps between them.
    pub fn from_angle(angle: f64) -> Self {
        let angle = angle.rem_euclid(360.0);

        match angle {
            a if a >= 350.0 || a <= 10.0 => Self::NewMoon,
            a if a < 80.0 => Self::WaxingCrescent,
            a if a <= 100.0 => Self::FirstQuarter,
            a if a < 170.0 => Self::WaxingGibbous,
            a if a <= 190.0 => Self::FullMoon,
            a if a < 260.0 => Self::WaningGibbous,
            a if a <= 280.0 => Self::LastQuarter,
            _ => Self::WaningCrescent,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for MoonPhase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Illuminated fraction of the disc, in percent, for a phase angle in degrees.
pub fn illumination_percent(angle: f64) -> f64 {
    (1.0 - (angle * PI / 180.0).cos()) / 2.0 * 100.0
}

/// Body returned by the moon endpoint.
///
/// `angle` is echoed back exactly as the astronomy service reported it.
#[derive(Debug, Clone, Serialize)]
pub struct MoonReport {
    pub phase: MoonPhase,
    pub angle: String,
    pub illumination: f64,
}

impl MoonReport {
    pub fn from_angle(raw_angle: &str, angle: f64) -> Self {
        Self {
            phase: MoonPhase::from_angle(angle),
            angle: raw_angle.to_string(),
            illumination: illumination_percent(angle),
        }
    }
}

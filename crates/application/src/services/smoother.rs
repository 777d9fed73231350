use std::collections::VecDeque;
use std::sync::Mutex;

pub const SMOOTHING_WINDOW: usize = 5;

/// Moving average over the most recent `window` readings of one metric.
///
/// Not idempotent: every call shifts the window. Non-finite inputs are not
/// filtered and propagate into the average.
#[derive(Debug)]
pub struct Smoother {
    window: usize,
    values: Mutex<VecDeque<f64>>,
}

impl Smoother {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            values: Mutex::new(VecDeque::with_capacity(window + 1)),
        }
    }

    pub fn smooth(&self, value: f64) -> f64 {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());

        values.push_back(value);
        while values.len() > self.window {
            values.pop_front();
        }

        values.iter().sum::<f64>() / values.len() as f64
    }

    pub fn len(&self) -> usize {
        self.values.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(SMOOTHING_WINDOW)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothedMetric {
    Uv,
    SolarRadiation,
}

/// One independently locked [`Smoother`] per smoothed metric, so UV and
/// solar radiation updates never contend with each other.
#[derive(Debug, Default)]
pub struct MetricSmoothers {
    uv: Smoother,
    solar_radiation: Smoother,
}

impl MetricSmoothers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(window: usize) -> Self {
        Self {
            uv: Smoother::new(window),
            solar_radiation: Smoother::new(window),
        }
    }

    pub fn smooth(&self, metric: SmoothedMetric, value: f64) -> f64 {
        self.get(metric).smooth(value)
    }

    pub fn get(&self, metric: SmoothedMetric) -> &Smoother {
        match metric {
            SmoothedMetric::Uv => &self.uv,
            SmoothedMetric::SolarRadiation => &self.solar_radiation,
        }
    }
}

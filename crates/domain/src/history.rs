use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Number of days before today covered by the cached history unit.
pub const PRIOR_DAYS: usize = 6;

/// Body of the weekly endpoint: index 0 is today's raw observations, indices
/// 1..=6 the preceding days, most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyHistory {
    #[serde(rename = "weeklyData")]
    pub weekly_data: Vec<Vec<Value>>,
}

impl WeeklyHistory {
    pub fn compose(today: Vec<Value>, prior_days: Vec<Vec<Value>>) -> Self {
        let mut weekly_data = Vec::with_capacity(1 + prior_days.len());
        weekly_data.push(today);
        weekly_data.extend(prior_days);
        Self { weekly_data }
    }
}

/// Calendar dates of the `PRIOR_DAYS` days before `base_epoch`, computed by
/// subtracting whole 86 400 s days and reading the date in `tz`.
pub fn prior_dates(base_epoch: i64, tz: Tz) -> Vec<NaiveDate> {
    (1..=PRIOR_DAYS as i64)
        .filter_map(|i| {
            DateTime::<Utc>::from_timestamp(base_epoch - i * SECONDS_PER_DAY, 0)
                .map(|at| at.with_timezone(&tz).date_naive())
        })
        .collect()
}

/// First instant of the day after `at`'s local date in `tz`.
///
/// Falls forward one hour when local midnight does not exist (DST gap).
pub fn next_local_midnight(at: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let tomorrow = at.with_timezone(&tz).date_naive() + Duration::days(1);
    let midnight = tomorrow.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or(at + Duration::days(1))
}

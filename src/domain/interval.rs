use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::TimeUtils;

/// Candle bucket width offered by the dashboard.
///
/// The backend accepts the Binance-style shorthand (`1m`, `5m`, ...), which is
/// also what the dropdown shows.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    clap::ValueEnum,
)]
pub enum Interval {
    #[default]
    #[serde(rename = "1m")]
    #[value(name = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    #[value(name = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    #[value(name = "15m")]
    FifteenMinutes,
    #[serde(rename = "1h")]
    #[value(name = "1h")]
    OneHour,
}

impl Interval {
    /// The query-string code sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::OneHour => "1h",
        }
    }

    pub fn duration_ms(&self) -> i64 {
        match self {
            Interval::OneMinute => TimeUtils::MS_IN_MIN,
            Interval::FiveMinutes => TimeUtils::MS_IN_5_MIN,
            Interval::FifteenMinutes => TimeUtils::MS_IN_15_MIN,
            Interval::OneHour => TimeUtils::MS_IN_H,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

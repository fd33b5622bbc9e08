use chrono::{DateTime, Utc};

use crate::domain::candle::Candle;
use crate::utils::time_utils::epoch_ms_to_datetime;

/// A candle plus whatever indicator values were paired with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRecord {
    pub candle: Candle,
    /// Display date derived from the candle's open time
    pub date: DateTime<Utc>,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
    pub rsi: Option<f64>,
}

impl ChartRecord {
    pub fn from_candle(candle: Candle) -> Self {
        Self {
            date: epoch_ms_to_datetime(candle.open_time),
            candle,
            macd: None,
            signal: None,
            histogram: None,
            rsi: None,
        }
    }

    /// Plot x coordinate: the open time in epoch seconds.
    pub fn x(&self) -> f64 {
        self.candle.open_time as f64 / 1000.0
    }
}

/// Time extents shared by all three chart regions, in epoch ms.
///
/// With no records the charts fall back to the placeholder range `[0, now]`.
pub fn x_extents(records: &[ChartRecord], now_ms: i64) -> (i64, i64) {
    match (records.first(), records.last()) {
        (Some(first), Some(last)) => (first.candle.open_time, last.candle.open_time),
        _ => (0, now_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(open_time: i64) -> ChartRecord {
        ChartRecord::from_candle(Candle {
            open_time,
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume: 0.0,
            close_time: open_time + 59_999,
        })
    }

    #[test]
    fn extents_span_first_to_last_record() {
        let records = vec![record(60_000), record(120_000), record(180_000)];
        assert_eq!(x_extents(&records, 999), (60_000, 180_000));
    }

    #[test]
    fn empty_records_use_placeholder_range() {
        assert_eq!(x_extents(&[], 5_000), (0, 5_000));
    }

    #[test]
    fn date_and_x_follow_open_time() {
        let r = record(1_700_000_000_000);
        assert_eq!(r.date.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(r.x(), 1_700_000_000.0);
    }
}

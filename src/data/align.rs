//! Merges the three independently fetched series into chart records.

use std::collections::HashMap;
use std::fmt;

use crate::domain::{Candle, ChartRecord, MacdSeries, RsiSeries};

/// How indicator entries are paired with candles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AlignStrategy {
    /// Index `i` of every series belongs to candle `i`. Relies on the backend
    /// returning equal-length, identically ordered arrays for one request.
    #[default]
    Positional,
    /// An indicator entry belongs to the candle whose open time equals its timestamp.
    #[value(name = "timestamp")]
    ByTimestamp,
}

/// Produces exactly one record per candle, in candle order.
///
/// Either indicator bundle may be missing or shorter than the candle series;
/// the affected fields are then left absent. No interpolation or gap filling.
pub fn align_series(
    candles: &[Candle],
    macd: Option<&MacdSeries>,
    rsi: Option<&RsiSeries>,
    strategy: AlignStrategy,
) -> Vec<ChartRecord> {
    let macd_lookup = match strategy {
        AlignStrategy::ByTimestamp => macd.map(|m| timestamp_index(&m.timestamps)),
        AlignStrategy::Positional => None,
    };
    let rsi_lookup = match strategy {
        AlignStrategy::ByTimestamp => rsi.map(|r| timestamp_index(&r.timestamps)),
        AlignStrategy::Positional => None,
    };

    candles
        .iter()
        .enumerate()
        .map(|(index, candle)| {
            let mut record = ChartRecord::from_candle(*candle);

            let macd_index = match &macd_lookup {
                Some(lookup) => lookup.get(&candle.open_time).copied(),
                None => Some(index),
            };
            if let (Some(series), Some(i)) = (macd, macd_index) {
                let point = series.point(i);
                record.macd = point.macd;
                record.signal = point.signal;
                record.histogram = point.histogram;
            }

            let rsi_index = match &rsi_lookup {
                Some(lookup) => lookup.get(&candle.open_time).copied(),
                None => Some(index),
            };
            if let (Some(series), Some(i)) = (rsi, rsi_index) {
                record.rsi = series.value(i);
            }

            record
        })
        .collect()
}

// First occurrence wins when the backend repeats a timestamp
fn timestamp_index(timestamps: &[i64]) -> HashMap<i64, usize> {
    let mut lookup = HashMap::with_capacity(timestamps.len());
    for (i, &t) in timestamps.iter().enumerate() {
        lookup.entry(t).or_insert(i);
    }
    lookup
}

/// How well the three series line up positionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentReport {
    pub candles: usize,
    pub macd_len: usize,
    pub rsi_len: usize,
    /// Positions where the MACD timestamp differs from the candle open time
    pub macd_timestamp_mismatches: usize,
    pub rsi_timestamp_mismatches: usize,
}

impl AlignmentReport {
    /// True when positional pairing is exact: equal lengths, matching timestamps.
    /// Absent bundles (length 0) are not counted as inconsistent.
    pub fn is_consistent(&self) -> bool {
        let len_ok = |len: usize| len == 0 || len == self.candles;
        len_ok(self.macd_len)
            && len_ok(self.rsi_len)
            && self.macd_timestamp_mismatches == 0
            && self.rsi_timestamp_mismatches == 0
    }
}

impl fmt::Display for AlignmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} candles, macd {} ({} ts mismatches), rsi {} ({} ts mismatches)",
            self.candles,
            self.macd_len,
            self.macd_timestamp_mismatches,
            self.rsi_len,
            self.rsi_timestamp_mismatches
        )
    }
}

pub fn alignment_report(
    candles: &[Candle],
    macd: Option<&MacdSeries>,
    rsi: Option<&RsiSeries>,
) -> AlignmentReport {
    AlignmentReport {
        candles: candles.len(),
        macd_len: macd.map(MacdSeries::len).unwrap_or(0),
        rsi_len: rsi.map(RsiSeries::len).unwrap_or(0),
        macd_timestamp_mismatches: macd
            .map(|m| count_mismatches(candles, &m.timestamps))
            .unwrap_or(0),
        rsi_timestamp_mismatches: rsi
            .map(|r| count_mismatches(candles, &r.timestamps))
            .unwrap_or(0),
    }
}

fn count_mismatches(candles: &[Candle], timestamps: &[i64]) -> usize {
    candles
        .iter()
        .zip(timestamps)
        .filter(|(candle, t)| candle.open_time != **t)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: i64 = 60_000;

    fn candles(n: usize) -> Vec<Candle> {
        (0..n)
            .map(|i| {
                let t = i as i64 * MIN;
                Candle {
                    open_time: t,
                    open: 100.0 + i as f64,
                    high: 101.0 + i as f64,
                    low: 99.0 + i as f64,
                    close: 100.5 + i as f64,
                    volume: 1.0,
                    close_time: t + MIN - 1,
                }
            })
            .collect()
    }

    fn macd(values: &[f64]) -> MacdSeries {
        MacdSeries {
            macd: values.iter().map(|&v| Some(v)).collect(),
            signal: values.iter().map(|&v| Some(v / 2.0)).collect(),
            histogram: values.iter().map(|&v| Some(v / 2.0)).collect(),
            timestamps: (0..values.len()).map(|i| i as i64 * MIN).collect(),
        }
    }

    fn rsi(values: &[f64]) -> RsiSeries {
        RsiSeries {
            rsi: values.iter().map(|&v| Some(v)).collect(),
            timestamps: (0..values.len()).map(|i| i as i64 * MIN).collect(),
        }
    }

    #[test]
    fn shorter_rsi_leaves_trailing_records_without_rsi() {
        let candles = candles(3);
        let macd = macd(&[1.0, 2.0, 3.0]);
        let rsi = rsi(&[40.0, 60.0]);

        let records = align_series(&candles, Some(&macd), Some(&rsi), AlignStrategy::Positional);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].rsi, Some(40.0));
        assert_eq!(records[1].rsi, Some(60.0));
        assert_eq!(records[2].rsi, None);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.macd, Some(i as f64 + 1.0));
            assert!(record.signal.is_some());
            assert!(record.histogram.is_some());
            assert_eq!(record.candle, candles[i]);
        }
    }

    #[test]
    fn missing_or_empty_bundles_leave_fields_absent() {
        let candles = candles(4);

        let records = align_series(&candles, None, Some(&RsiSeries::default()), AlignStrategy::Positional);

        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.macd.is_none() && r.rsi.is_none()));
    }

    #[test]
    fn longer_indicator_arrays_are_truncated_to_candles() {
        let candles = candles(2);
        let records = align_series(
            &candles,
            Some(&macd(&[1.0, 2.0, 3.0, 4.0])),
            None,
            AlignStrategy::Positional,
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].macd, Some(2.0));
    }

    #[test]
    fn null_entries_become_absent_values() {
        let candles = candles(2);
        let rsi = RsiSeries {
            rsi: vec![None, Some(55.0)],
            timestamps: vec![0, MIN],
        };
        let records = align_series(&candles, None, Some(&rsi), AlignStrategy::Positional);
        assert_eq!(records[0].rsi, None);
        assert_eq!(records[1].rsi, Some(55.0));
    }

    #[test]
    fn no_candles_means_no_records_whatever_the_indicators() {
        let records = align_series(
            &[],
            Some(&macd(&[1.0, 2.0])),
            Some(&rsi(&[50.0])),
            AlignStrategy::Positional,
        );
        assert!(records.is_empty());
    }

    #[test]
    fn timestamp_strategy_pairs_by_open_time() {
        let candles = candles(3);
        // RSI starts one candle late, so positional pairing would be off by one
        let rsi = RsiSeries {
            rsi: vec![Some(10.0), Some(20.0)],
            timestamps: vec![MIN, 2 * MIN],
        };

        let by_ts = align_series(&candles, None, Some(&rsi), AlignStrategy::ByTimestamp);
        assert_eq!(by_ts[0].rsi, None);
        assert_eq!(by_ts[1].rsi, Some(10.0));
        assert_eq!(by_ts[2].rsi, Some(20.0));

        let positional = align_series(&candles, None, Some(&rsi), AlignStrategy::Positional);
        assert_eq!(positional[0].rsi, Some(10.0));
        assert_eq!(positional[2].rsi, None);
    }

    #[test]
    fn report_flags_length_and_timestamp_drift() {
        let candles = candles(3);
        let good = alignment_report(&candles, Some(&macd(&[1.0, 2.0, 3.0])), Some(&rsi(&[1.0, 2.0, 3.0])));
        assert!(good.is_consistent());

        let short = alignment_report(&candles, None, Some(&rsi(&[1.0, 2.0])));
        assert!(!short.is_consistent());
        assert_eq!(short.rsi_len, 2);

        let mut shifted = macd(&[1.0, 2.0, 3.0]);
        shifted.timestamps = vec![MIN, 2 * MIN, 3 * MIN];
        let drift = alignment_report(&candles, Some(&shifted), None);
        assert_eq!(drift.macd_timestamp_mismatches, 3);
        assert!(!drift.is_consistent());
    }
}

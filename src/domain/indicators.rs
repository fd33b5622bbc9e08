use serde::{Deserialize, Serialize};

/// Body of the `/macd` endpoint: four parallel arrays of equal length.
///
/// Entries are nullable. The backend's moving averages emit `null` during
/// their warm-up period and those positions are treated as absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    #[serde(default)]
    pub macd: Vec<Option<f64>>,
    #[serde(default)]
    pub signal: Vec<Option<f64>>,
    #[serde(default)]
    pub histogram: Vec<Option<f64>>,
    #[serde(default)]
    pub timestamps: Vec<i64>,
}

/// Body of the `/rsi` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RsiSeries {
    #[serde(default)]
    pub rsi: Vec<Option<f64>>,
    #[serde(default)]
    pub timestamps: Vec<i64>,
}

/// One MACD sample pulled out of the parallel arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacdPoint {
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

impl MacdSeries {
    /// Longest of the value arrays. The arrays should agree, but nothing enforces it.
    pub fn len(&self) -> usize {
        self.macd
            .len()
            .max(self.signal.len())
            .max(self.histogram.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn point(&self, index: usize) -> MacdPoint {
        MacdPoint {
            macd: value_at(&self.macd, index),
            signal: value_at(&self.signal, index),
            histogram: value_at(&self.histogram, index),
        }
    }

    pub fn position_of(&self, timestamp_ms: i64) -> Option<usize> {
        self.timestamps.iter().position(|&t| t == timestamp_ms)
    }
}

impl RsiSeries {
    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        value_at(&self.rsi, index)
    }

    pub fn position_of(&self, timestamp_ms: i64) -> Option<usize> {
        self.timestamps.iter().position(|&t| t == timestamp_ms)
    }
}

fn value_at(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten()
}

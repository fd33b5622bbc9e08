use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One OHLCV bucket as served by the `/kline` endpoint.
///
/// Field names on the wire are camelCase (`openTime`, `closeTime`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    pub open_time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub close_time: i64,
}

impl Candle {
    pub fn get_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open, self.close),
            CandleType::Bearish => (self.close, self.open),
        }
    }

    pub fn is_bullish(&self) -> bool {
        self.get_type() == CandleType::Bullish
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(open: f64, close: f64) -> Candle {
        Candle {
            open_time: 0,
            open,
            high: open.max(close) + 1.0,
            low: open.min(close) - 1.0,
            close,
            volume: 10.0,
            close_time: 59_999,
        }
    }

    #[test]
    fn body_range_is_ordered_for_both_directions() {
        assert_eq!(candle(100.0, 105.0).body_range(), (100.0, 105.0));
        assert_eq!(candle(105.0, 100.0).body_range(), (100.0, 105.0));
        assert!(candle(100.0, 100.0).is_bullish());
        assert_eq!(candle(105.0, 100.0).get_type(), CandleType::Bearish);
    }

    #[test]
    fn decodes_backend_wire_format() {
        let json = r#"{"openTime":1700000000000,"open":1.5,"high":2,"low":1,"close":1.75,"volume":42.0,"closeTime":1700000059999}"#;
        let c: Candle = serde_json::from_str(json).unwrap();
        assert_eq!(c.open_time, 1_700_000_000_000);
        assert_eq!(c.high, 2.0);
        assert_eq!(c.close_time, 1_700_000_059_999);
    }
}

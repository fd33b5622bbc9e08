// Domain types and value objects
pub mod candle;
pub mod chart_record;
pub mod indicators;
pub mod interval;
pub mod pair;
pub mod window;

// Re-export commonly used types
pub use candle::Candle;
pub use chart_record::{ChartRecord, x_extents};
pub use indicators::{MacdPoint, MacdSeries, RsiSeries};
pub use interval::Interval;
pub use pair::TradingPair;
pub use window::FetchWindow;

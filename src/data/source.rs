use async_trait::async_trait;

use crate::data::error::ApiError;
use crate::domain::{Candle, FetchWindow, Interval, MacdSeries, RsiSeries};

/// Anything that can serve the dashboard's three series plus the symbol list.
///
/// The REST client is the production implementation; tests plug in fakes.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MarketDataSource: Send + Sync {
    async fn fetch_klines(
        &self,
        symbol: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<Vec<Candle>, ApiError>;

    async fn fetch_macd(
        &self,
        symbol: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<MacdSeries, ApiError>;

    async fn fetch_rsi(
        &self,
        symbol: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<RsiSeries, ApiError>;

    async fn fetch_symbols(&self) -> Result<Vec<String>, ApiError>;

    /// A unique identifier for this implementation (shows up in logs).
    fn signature(&self) -> &'static str;
}

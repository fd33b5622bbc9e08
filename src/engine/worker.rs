use crate::data::{
    AlignStrategy, ApiError, MarketDataSource, align_series, alignment_report,
};
use crate::domain::{Candle, MacdSeries, RsiSeries};
use crate::utils::app_time::now;

use super::messages::{CycleRequest, CycleResult};

/// Raw bodies of the three per-cycle requests.
#[derive(Debug, Clone, Default)]
pub struct FetchedSeries {
    pub candles: Vec<Candle>,
    pub macd: MacdSeries,
    pub rsi: RsiSeries,
}

/// Issues the kline, MACD and RSI requests one after another.
/// The first failure aborts the cycle; there is no partial success.
pub async fn fetch_all(
    source: &dyn MarketDataSource,
    request: &CycleRequest,
) -> Result<FetchedSeries, ApiError> {
    let symbol = request.symbol.as_str();
    let candles = source
        .fetch_klines(symbol, request.interval, request.window)
        .await?;
    let macd = source
        .fetch_macd(symbol, request.interval, request.window)
        .await?;
    let rsi = source
        .fetch_rsi(symbol, request.interval, request.window)
        .await?;

    Ok(FetchedSeries { candles, macd, rsi })
}

/// One full cycle: fetch, check alignment, align.
pub async fn run_fetch_cycle(
    source: &dyn MarketDataSource,
    request: CycleRequest,
    strategy: AlignStrategy,
) -> CycleResult {
    let start = now();

    let outcome = fetch_all(source, &request).await.map(|fetched| {
        let report = alignment_report(&fetched.candles, Some(&fetched.macd), Some(&fetched.rsi));
        if !fetched.candles.is_empty() && !report.is_consistent() {
            log::warn!(
                "[{}] indicator series do not line up with candles ({:?} alignment): {}",
                source.signature(),
                strategy,
                report
            );
        }
        align_series(&fetched.candles, Some(&fetched.macd), Some(&fetched.rsi), strategy)
    });

    CycleResult {
        generation: request.generation,
        interval: request.interval,
        window: request.window,
        elapsed: start.elapsed(),
        outcome,
    }
}

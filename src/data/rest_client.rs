use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::API;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::error::ApiError;
use crate::data::source::MarketDataSource;
use crate::domain::{Candle, FetchWindow, Interval, MacdSeries, RsiSeries};

/// Thin HTTP client for the indicator backend.
///
/// One GET per endpoint, no retries and no timeout beyond the transport's
/// defaults. A non-2xx status is an error; so is a body that does not decode.
#[derive(Clone)]
pub struct RestApiClient {
    base_url: String,
    client: Client,
}

impl RestApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// URL for one of the windowed series endpoints (`kline`, `macd`, `rsi`).
    /// Query values are percent-encoded.
    pub fn series_url(
        &self,
        endpoint: &'static str,
        symbol: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<Url, ApiError> {
        let start = window.start_ms.to_string();
        let end = window.end_ms.to_string();
        Url::parse_with_params(
            &self.endpoint_url(endpoint),
            [
                ("symbol", symbol),
                ("interval", interval.as_str()),
                ("startTime", start.as_str()),
                ("endTime", end.as_str()),
            ],
        )
        .map_err(|e| invalid_url(endpoint, e))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<T, ApiError> {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_http_requests {
            log::info!("GET {}", url);
        }

        let transport = |e: reqwest::Error| ApiError::Transport {
            endpoint,
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_http_requests {
            log::info!("{} responded with {} bytes", endpoint, body.len());
        }

        decode_body(endpoint, &body)
    }

    async fn get_series<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        symbol: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<T, ApiError> {
        let url = self.series_url(endpoint, symbol, interval, window)?;
        self.get_json(endpoint, url).await
    }
}

// A bad --base-url never reaches the network; report it like a transport failure
fn invalid_url(endpoint: &'static str, e: impl std::fmt::Display) -> ApiError {
    ApiError::Transport {
        endpoint,
        message: format!("invalid URL: {}", e),
    }
}

/// Parses a response body, tagging failures with the endpoint they came from.
pub fn decode_body<T: DeserializeOwned>(endpoint: &'static str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode {
        endpoint,
        message: e.to_string(),
    })
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MarketDataSource for RestApiClient {
    async fn fetch_klines(
        &self,
        symbol: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<Vec<Candle>, ApiError> {
        self.get_series(API.endpoints.kline, symbol, interval, window)
            .await
    }

    async fn fetch_macd(
        &self,
        symbol: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<MacdSeries, ApiError> {
        self.get_series(API.endpoints.macd, symbol, interval, window)
            .await
    }

    async fn fetch_rsi(
        &self,
        symbol: &str,
        interval: Interval,
        window: FetchWindow,
    ) -> Result<RsiSeries, ApiError> {
        self.get_series(API.endpoints.rsi, symbol, interval, window)
            .await
    }

    async fn fetch_symbols(&self) -> Result<Vec<String>, ApiError> {
        let endpoint = API.endpoints.symbols;
        let url = Url::parse(&self.endpoint_url(endpoint)).map_err(|e| invalid_url(endpoint, e))?;
        self.get_json(endpoint, url).await
    }

    fn signature(&self) -> &'static str {
        "Indicator REST API"
    }
}

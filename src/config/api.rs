//! Backend REST API configuration constants.

/// Endpoint paths, relative to the base URL
pub struct ApiEndpoints {
    pub kline: &'static str,
    pub macd: &'static str,
    pub rsi: &'static str,
    pub symbols: &'static str,
}

/// The Master API Configuration Struct
pub struct ApiConfig {
    /// Base URL of the indicator backend (overridable with `--base-url`)
    pub default_base_url: &'static str,
    /// Trading pair requested for klines and indicators (overridable with `--symbol`)
    pub default_symbol: &'static str,
    pub endpoints: ApiEndpoints,
}

pub const API: ApiConfig = ApiConfig {
    default_base_url: "http://localhost:5001/api",
    default_symbol: "BTCUSDT",
    endpoints: ApiEndpoints {
        kline: "kline",
        macd: "macd",
        rsi: "rsi",
        symbols: "symbols",
    },
};

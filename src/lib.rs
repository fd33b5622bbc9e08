#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{AlignStrategy, MarketDataSource, RestApiClient};
pub use domain::{Candle, ChartRecord, Interval};
pub use engine::RefreshController;
pub use ui::KlineDashboardApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::API;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the indicator backend
    #[arg(long, default_value_t = API.default_base_url.to_string())]
    pub base_url: String,

    /// Trading pair to chart
    #[arg(long, default_value_t = API.default_symbol.to_string())]
    pub symbol: String,

    /// Initial candle interval (otherwise the last session's choice)
    #[arg(long, value_enum)]
    pub interval: Option<Interval>,

    /// How indicator values are paired with candles
    #[arg(long, value_enum, default_value_t = AlignStrategy::Positional)]
    pub align: AlignStrategy,

    /// Print the symbols served by the backend and exit
    #[arg(long, default_value_t = false)]
    pub list_symbols: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            base_url: API.default_base_url.to_string(),
            symbol: API.default_symbol.to_string(),
            interval: None,
            align: AlignStrategy::default(),
            list_symbols: false,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: &Cli) -> Box<dyn eframe::App> {
    Box::new(ui::KlineDashboardApp::new(cc, cli))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_match_config() {
        let cli = Cli::parse_from(["kline-dashboard"]);
        assert_eq!(cli.base_url, "http://localhost:5001/api");
        assert_eq!(cli.symbol, "BTCUSDT");
        assert_eq!(cli.interval, None);
        assert_eq!(cli.align, AlignStrategy::Positional);
        assert!(!cli.list_symbols);
    }

    #[test]
    fn cli_accepts_interval_codes_and_align_modes() {
        let cli = Cli::parse_from([
            "kline-dashboard",
            "--interval",
            "15m",
            "--align",
            "timestamp",
            "--symbol",
            "ETHUSDT",
        ]);
        assert_eq!(cli.interval, Some(Interval::FifteenMinutes));
        assert_eq!(cli.align, AlignStrategy::ByTimestamp);
        assert_eq!(cli.symbol, "ETHUSDT");

        assert!(Cli::try_parse_from(["kline-dashboard", "--interval", "2m"]).is_err());
    }
}

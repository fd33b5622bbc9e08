/// Every user-visible string in one place.
pub struct UiText {
    pub title_suffix: &'static str,
    pub interval_label: &'static str,
    pub refresh_button: &'static str,
    pub refresh_button_loading: &'static str,
    pub error_prefix: &'static str,

    // Plot axes and legends
    pub plot_x_axis: &'static str,
    pub plot_price_axis: &'static str,
    pub plot_macd_axis: &'static str,
    pub plot_rsi_axis: &'static str,
    pub series_price: &'static str,
    pub series_macd: &'static str,
    pub series_signal: &'static str,
    pub series_histogram: &'static str,
    pub series_rsi: &'static str,

    // Hover readout
    pub readout_open: &'static str,
    pub readout_high: &'static str,
    pub readout_low: &'static str,
    pub readout_close: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    title_suffix: "Candlestick Chart",
    interval_label: "Interval:",
    refresh_button: "Refresh",
    refresh_button_loading: "Loading...",
    error_prefix: "Error",

    plot_x_axis: "Time (UTC)",
    plot_price_axis: "Price",
    plot_macd_axis: "MACD",
    plot_rsi_axis: "RSI",
    series_price: "Price",
    series_macd: "MACD",
    series_signal: "Signal",
    series_histogram: "Histogram",
    series_rsi: "RSI",

    readout_open: "O",
    readout_high: "H",
    readout_low: "L",
    readout_close: "C",
};

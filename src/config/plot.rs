//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub bullish_color: Color32,
    pub bearish_color: Color32,
    pub macd_line_color: Color32,
    pub signal_line_color: Color32,
    pub histogram_positive_color: Color32,
    pub histogram_negative_color: Color32,
    pub rsi_line_color: Color32,
    /// Heights of the three stacked regions (price, MACD, RSI) in points
    pub price_plot_height: f32,
    pub macd_plot_height: f32,
    pub rsi_plot_height: f32,
    /// Fraction of one interval occupied by a candle body / histogram bar
    pub candle_body_fill_pct: f64,
    pub indicator_line_width: f32,
    /// RSI is bounded, so its region always shows this range
    pub rsi_range: (f64, f64),
    /// Time format for cursor readouts and the hover readout
    pub time_format: &'static str,
    /// Shorter format for x-axis tick labels
    pub axis_time_format: &'static str,
    /// Headroom added above and below the data on auto-scaled y axes
    pub y_padding_pct: f64,
    /// Ticks requested on the price and indicator y axes
    pub y_axis_divisions: usize,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    bullish_color: Color32::from_rgb(38, 166, 154),  // Teal green
    bearish_color: Color32::from_rgb(239, 83, 80),   // Soft red
    macd_line_color: Color32::from_rgb(255, 127, 14), // #ff7f0e
    signal_line_color: Color32::from_rgb(44, 160, 44), // #2ca02c
    histogram_positive_color: Color32::from_rgb(44, 160, 44),
    histogram_negative_color: Color32::from_rgb(255, 127, 14),
    rsi_line_color: Color32::from_rgb(136, 132, 216), // #8884d8
    price_plot_height: 400.0,
    macd_plot_height: 150.0,
    rsi_plot_height: 150.0,
    candle_body_fill_pct: 0.7,
    indicator_line_width: 1.5,
    rsi_range: (0.0, 100.0),
    time_format: "%Y-%m-%d %H:%M",
    axis_time_format: "%H:%M",
    y_padding_pct: 0.05,
    y_axis_divisions: 5,
};

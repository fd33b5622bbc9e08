use eframe::egui::Stroke;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Line, PlotPoints, PlotUi};
use itertools::Itertools;

use crate::config::PLOT_CONFIG;
use crate::domain::ChartRecord;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub records: &'a [ChartRecord],
    /// Width of one candle body / histogram bar, in plot x units (seconds)
    pub bar_width: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. CANDLESTICKS (price region)
// ============================================================================
pub struct CandleLayer;

impl PlotLayer for CandleLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let boxes: Vec<BoxElem> = ctx
            .records
            .iter()
            .map(|record| {
                let candle = &record.candle;
                let (body_low, body_high) = candle.body_range();
                let color = if candle.is_bullish() {
                    PLOT_CONFIG.bullish_color
                } else {
                    PLOT_CONFIG.bearish_color
                };

                // Whiskers double as wicks
                BoxElem::new(
                    record.x(),
                    BoxSpread::new(
                        candle.low,
                        body_low,
                        (body_low + body_high) / 2.0,
                        body_high,
                        candle.high,
                    ),
                )
                .box_width(ctx.bar_width)
                .whisker_width(0.0)
                .fill(color)
                .stroke(Stroke::new(1.0, color))
            })
            .collect();

        plot_ui.box_plot(BoxPlot::new(UI_TEXT.series_price, boxes));
    }
}

// ============================================================================
// 2. MACD + SIGNAL LINES
// ============================================================================
pub struct MacdLinesLayer;

impl PlotLayer for MacdLinesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        draw_line(
            plot_ui,
            UI_TEXT.series_macd,
            segments(ctx.records, |r| r.macd),
            PLOT_CONFIG.macd_line_color,
        );
        draw_line(
            plot_ui,
            UI_TEXT.series_signal,
            segments(ctx.records, |r| r.signal),
            PLOT_CONFIG.signal_line_color,
        );
    }
}

// ============================================================================
// 3. MACD HISTOGRAM
// ============================================================================
pub struct HistogramLayer;

impl PlotLayer for HistogramLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let bars: Vec<Bar> = ctx
            .records
            .iter()
            .filter_map(|record| record.histogram.map(|h| (record.x(), h)))
            .map(|(x, h)| {
                let color = if h >= 0.0 {
                    PLOT_CONFIG.histogram_positive_color
                } else {
                    PLOT_CONFIG.histogram_negative_color
                };
                Bar::new(x, h).width(ctx.bar_width).fill(color)
            })
            .collect();

        plot_ui.bar_chart(BarChart::new(UI_TEXT.series_histogram, bars));
    }
}

// ============================================================================
// 4. RSI LINE
// ============================================================================
pub struct RsiLayer;

impl PlotLayer for RsiLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        draw_line(
            plot_ui,
            UI_TEXT.series_rsi,
            segments(ctx.records, |r| r.rsi),
            PLOT_CONFIG.rsi_line_color,
        );
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Splits one indicator into runs of consecutive present values.
/// Absent values break the line instead of being bridged.
pub fn segments(
    records: &[ChartRecord],
    value: impl Fn(&ChartRecord) -> Option<f64>,
) -> Vec<Vec<[f64; 2]>> {
    let runs = records
        .iter()
        .map(|record| value(record).map(|v| [record.x(), v]))
        .chunk_by(|point| point.is_some());

    let mut out = Vec::new();
    for (present, run) in &runs {
        if present {
            out.push(run.flatten().collect());
        }
    }
    out
}

fn draw_line(
    plot_ui: &mut PlotUi,
    name: &str,
    runs: Vec<Vec<[f64; 2]>>,
    color: eframe::egui::Color32,
) {
    for run in runs {
        plot_ui.line(
            Line::new(name, PlotPoints::new(run))
                .color(color)
                .width(PLOT_CONFIG.indicator_line_width),
        );
    }
}

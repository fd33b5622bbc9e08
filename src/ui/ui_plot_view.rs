use eframe::egui::{self, Id};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot, PlotPoint};

use crate::config::PLOT_CONFIG;
use crate::domain::{ChartRecord, x_extents};
use crate::engine::ChartSeries;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::plot_layers::{
    CandleLayer, HistogramLayer, LayerContext, MacdLinesLayer, PlotLayer, RsiLayer,
};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::format_price;
use crate::utils::time_utils::format_epoch_ms;

/// The three stacked, time-linked chart regions.
pub struct ChartView {
    link_group: Id,
    /// Candle under the pointer on the previous frame
    hovered: Option<usize>,
}

impl Default for ChartView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartView {
    pub fn new() -> Self {
        Self {
            link_group: Id::new("kline_time_axis"),
            hovered: None,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, series: &ChartSeries, now_ms: i64) {
        let records = series.records.as_slice();
        let (start_ms, end_ms) = x_extents(records, now_ms);
        let interval_secs = series.interval.duration_ms() as f64 / 1000.0;

        // Pad by half a candle so the first and last bodies are not clipped
        let x_min = start_ms as f64 / 1000.0 - interval_secs / 2.0;
        let x_max = end_ms as f64 / 1000.0 + interval_secs / 2.0;

        let ctx = LayerContext {
            records,
            bar_width: interval_secs * PLOT_CONFIG.candle_body_fill_pct,
        };

        self.render_readout(ui, records);

        // 1. Price
        let price_bounds = padded_bounds(
            records
                .iter()
                .flat_map(|r| [r.candle.low, r.candle.high]),
        );
        let hovered = self
            .base_plot("price_plot", PLOT_CONFIG.price_plot_height, UI_TEXT.plot_price_axis)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                if let Some((lo, hi)) = price_bounds {
                    plot_ui.set_plot_bounds_y(lo..=hi);
                }
                CandleLayer.render(plot_ui, &ctx);

                plot_ui
                    .pointer_coordinate()
                    .and_then(|pointer| nearest_index(records, pointer.x))
            })
            .inner;
        self.hovered = hovered;

        ui.add_space(UI_CONFIG.chart_spacing);

        // 2. MACD
        let macd_bounds = padded_bounds(
            records
                .iter()
                .flat_map(|r| [r.macd, r.signal, r.histogram, Some(0.0)])
                .flatten(),
        );
        self.base_plot("macd_plot", PLOT_CONFIG.macd_plot_height, UI_TEXT.plot_macd_axis)
            .legend(Legend::default().position(Corner::LeftTop))
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                if let Some((lo, hi)) = macd_bounds {
                    plot_ui.set_plot_bounds_y(lo..=hi);
                }
                let layers: Vec<Box<dyn PlotLayer>> =
                    vec![Box::new(HistogramLayer), Box::new(MacdLinesLayer)];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });

        ui.add_space(UI_CONFIG.chart_spacing);

        // 3. RSI, always on its bounded scale
        let (rsi_lo, rsi_hi) = PLOT_CONFIG.rsi_range;
        self.base_plot("rsi_plot", PLOT_CONFIG.rsi_plot_height, UI_TEXT.plot_rsi_axis)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(rsi_lo..=rsi_hi);
                RsiLayer.render(plot_ui, &ctx);
            });
    }

    fn render_readout(&self, ui: &mut egui::Ui, records: &[ChartRecord]) {
        let Some(record) = self.hovered.and_then(|i| records.get(i)) else {
            // Keep the layout from jumping when the pointer leaves the chart
            ui.label_subdued(" ");
            return;
        };
        let candle = &record.candle;
        let color = if candle.is_bullish() {
            PLOT_CONFIG.bullish_color
        } else {
            PLOT_CONFIG.bearish_color
        };

        ui.horizontal(|ui| {
            ui.label_subdued(record.date.format(PLOT_CONFIG.time_format).to_string());
            ui.metric(UI_TEXT.readout_open, &format_price(candle.open), color);
            ui.metric(UI_TEXT.readout_high, &format_price(candle.high), color);
            ui.metric(UI_TEXT.readout_low, &format_price(candle.low), color);
            ui.metric(UI_TEXT.readout_close, &format_price(candle.close), color);
        });
    }

    fn base_plot<'a>(&self, id: &'a str, height: f32, y_label: &'a str) -> Plot<'a> {
        Plot::new(id)
            .height(height)
            .link_axis(self.link_group, [true, false])
            .link_cursor(self.link_group, [true, false])
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_value_axis(y_label)])
            .label_formatter(cursor_label)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
    }
}

/// Index of the record whose open time is closest to plot x `x` (seconds).
pub fn nearest_index(records: &[ChartRecord], x: f64) -> Option<usize> {
    if records.is_empty() {
        return None;
    }
    let after = records.partition_point(|r| r.x() < x);
    if after == 0 {
        return Some(0);
    }
    if after == records.len() {
        return Some(records.len() - 1);
    }
    let before = after - 1;
    if (x - records[before].x()) <= (records[after].x() - x) {
        Some(before)
    } else {
        Some(after)
    }
}

/// Min/max of the values with a little headroom; `None` when there are none.
pub fn padded_bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        })?;

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * PLOT_CONFIG.y_padding_pct
    } else {
        // Flat series: give it some height around the single value
        lo.abs().max(1.0) * PLOT_CONFIG.y_padding_pct
    };
    Some((lo - pad, hi + pad))
}

/// Hover text: series name (if any), time and value.
pub fn cursor_label(name: &str, point: &PlotPoint) -> String {
    let time = format_epoch_ms((point.x * 1000.0).round() as i64, PLOT_CONFIG.time_format);
    if name.is_empty() {
        format!("{}\n{:.2}", time, point.y)
    } else {
        format!("{}\n{}\n{:.2}", name, time, point.y)
    }
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(|grid_mark, _range| {
            format_epoch_ms(
                (grid_mark.value * 1000.0).round() as i64,
                PLOT_CONFIG.axis_time_format,
            )
        })
}

fn create_value_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}

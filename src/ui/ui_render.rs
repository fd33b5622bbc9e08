use eframe::egui::{Button, CentralPanel, Context, Frame, Margin, ScrollArea, Ui};
use strum::IntoEnumIterator;

use crate::domain::{Interval, TradingPair};
use crate::engine::RefreshController;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::utils::time_utils::utc_now_ms;

use super::app::KlineDashboardApp;

/// User intents collected during a frame and applied after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiAction {
    ToggleMenu,
    SelectInterval(Interval),
    Refresh,
}

impl KlineDashboardApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context) -> Vec<UiAction> {
        let mut actions = Vec::new();
        let controller = &self.controller;
        let chart_view = &mut self.chart_view;

        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(UI_CONFIG.panel_margin));

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.label_title(format!(
                "{} {}",
                TradingPair::display_name(controller.symbol()),
                UI_TEXT.title_suffix
            ));
            ui.add_space(6.0);

            actions.extend(render_controls(ui, controller));

            if let Some(message) = controller.error_message() {
                ui.add_space(4.0);
                ui.label_error(format!("{}: {}", UI_TEXT.error_prefix, message));
            }

            ui.add_space(6.0);

            // Stale snapshot stays on screen while a cycle is in flight
            if let Some(series) = controller
                .state()
                .series()
                .filter(|s| !s.records.is_empty())
            {
                ScrollArea::vertical().show(ui, |ui| {
                    chart_view.show(ui, series, utc_now_ms());
                });
            }
        });

        actions
    }
}

fn render_controls(ui: &mut Ui, controller: &RefreshController) -> Vec<UiAction> {
    let mut actions = Vec::new();
    let current = controller.interval();
    let loading = controller.is_loading();

    ui.horizontal(|ui| {
        ui.label(UI_TEXT.interval_label);

        let arrow = if controller.is_menu_open() { "▴" } else { "▾" };
        if ui.button(format!("{} {}", current, arrow)).clicked() {
            actions.push(UiAction::ToggleMenu);
        }

        let refresh_text = if loading {
            UI_TEXT.refresh_button_loading
        } else {
            UI_TEXT.refresh_button
        };
        if ui.add_enabled(!loading, Button::new(refresh_text)).clicked() {
            actions.push(UiAction::Refresh);
        }
    });

    if controller.is_menu_open() {
        ui.horizontal(|ui| {
            for interval in Interval::iter() {
                if ui
                    .selectable_label(interval == current, interval.as_str())
                    .clicked()
                {
                    actions.push(UiAction::SelectInterval(interval));
                }
            }
        });
    }

    actions
}

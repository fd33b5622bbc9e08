use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::Cli;
use crate::data::{AlignStrategy, MarketDataSource, RestApiClient};
use crate::domain::Interval;
use crate::engine::{CycleResult, RefreshController};
use crate::ui::ui_plot_view::ChartView;
use crate::ui::ui_render::UiAction;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::now;
use crate::utils::time_utils::utc_now_ms;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The slice of UI state that survives restarts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct PersistedSettings {
    pub interval: Interval,
}

/// Command line beats the last session, which beats the built-in default.
pub fn resolve_initial_interval(
    cli: Option<Interval>,
    persisted: Option<PersistedSettings>,
) -> Interval {
    cli.or(persisted.map(|s| s.interval)).unwrap_or_default()
}

pub struct KlineDashboardApp {
    pub(super) controller: RefreshController,
    pub(super) source: Arc<dyn MarketDataSource>,
    pub(super) align_strategy: AlignStrategy,
    pub(super) cycle_promise: Option<Promise<CycleResult>>,
    pub(super) chart_view: ChartView,
}

impl KlineDashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, cli: &Cli) -> Self {
        let persisted: Option<PersistedSettings> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            match &persisted {
                Some(settings) => log::info!("Loaded persisted settings: {:?}", settings),
                None => log::info!("No persisted settings found. Using defaults."),
            }
        }

        let interval = resolve_initial_interval(cli.interval, persisted);
        let source: Arc<dyn MarketDataSource> = Arc::new(RestApiClient::new(&cli.base_url));
        log::info!(
            "Dashboard for {} @ {} via {} ({})",
            cli.symbol,
            interval,
            source.signature(),
            cli.base_url
        );

        Self::with_source(source, &cli.symbol, interval, cli.align)
    }

    pub fn with_source(
        source: Arc<dyn MarketDataSource>,
        symbol: &str,
        interval: Interval,
        align_strategy: AlignStrategy,
    ) -> Self {
        Self {
            controller: RefreshController::new(symbol, interval),
            source,
            align_strategy,
            cycle_promise: None,
            chart_view: ChartView::new(),
        }
    }

    pub(super) fn apply_action(&mut self, action: UiAction) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("UI action: {:?}", action);
        }

        let (t, now_ms) = (now(), utc_now_ms());
        let request = match action {
            UiAction::ToggleMenu => {
                self.controller.toggle_menu();
                None
            }
            UiAction::SelectInterval(interval) => {
                self.controller.select_interval(interval, t, now_ms)
            }
            UiAction::Refresh => self.controller.refresh(t, now_ms),
        };

        if let Some(request) = request {
            self.start_cycle(request);
        }
    }
}

impl eframe::App for KlineDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.unmount();

        // Drop the in-flight cycle; its result would be discarded anyway
        self.cycle_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            interval: self.controller.interval(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // First frame (or after unmount): load immediately and arm the timer
        if let Some(request) = self.controller.mount(now(), utc_now_ms()) {
            self.start_cycle(request);
        }

        self.poll_cycle(ctx);

        if let Some(request) = self.controller.poll_timer(now(), utc_now_ms()) {
            self.start_cycle(request);
        }

        for action in self.render_central_panel(ctx) {
            self.apply_action(action);
        }

        // Wake up again when the next refresh is due
        if let Some(remaining) = self.controller.time_until_refresh(now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

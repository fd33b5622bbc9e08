use eframe::egui;
use poll_promise::Promise;
use std::sync::Arc;

use crate::engine::{CycleRequest, run_fetch_cycle};
use crate::ui::app::KlineDashboardApp;

impl KlineDashboardApp {
    /// Spawns the fetch pipeline for `request`.
    /// A promise still pending belongs to a superseded cycle and is dropped.
    pub(super) fn start_cycle(&mut self, request: CycleRequest) {
        let source = Arc::clone(&self.source);
        let strategy = self.align_strategy;
        let future = async move { run_fetch_cycle(source.as_ref(), request, strategy).await };

        // Native: tokio runtime entered in main. Web: browser event loop.
        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_async(future);

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::spawn_local(future);

        self.cycle_promise = Some(promise);
    }

    pub(super) fn poll_cycle(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.cycle_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(result) => {
                let elapsed = result.elapsed;
                if self.controller.complete(result) && elapsed.as_millis() > 1_000 {
                    log::info!("Fetch cycle completed in {:.2}s", elapsed.as_secs_f32());
                }
            }
            Err(pending) => {
                self.cycle_promise = Some(pending);
                ctx.request_repaint();
            }
        }
    }
}

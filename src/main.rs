#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use kline_dashboard::{Cli, run_app};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// This keeps the WASM memory allocator from being stripped
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn _keep_alive() {}

// The binary target still needs a main() on wasm; `start` below is the real entry.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .chain(fern::Output::call(|record| {
            let line = format!("[{}] {}", record.level(), record.args());
            web_sys::console::log_1(&line.into());
        }))
        .apply();

    log::info!("Kline dashboard starting in WASM mode...");

    // B. Locate the canvas
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // C. No command line in the browser: configured defaults
    let cli = Cli::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(run_app(cc, &cli))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use eframe::NativeOptions;
    use kline_dashboard::config::APP_STATE_PATH;
    use kline_dashboard::{MarketDataSource, RestApiClient};
    use std::path::PathBuf;
    use tokio::runtime::Runtime;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for fetch cycles (and the one-shot symbol listing)
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;

    if args.list_symbols {
        let client = RestApiClient::new(&args.base_url);
        let symbols = rt
            .block_on(client.fetch_symbols())
            .with_context(|| format!("Failed to list symbols from {}", args.base_url))?;
        for symbol in symbols {
            println!("{}", symbol);
        }
        return Ok(());
    }

    // Promise::spawn_async needs an entered runtime on the UI thread
    let _guard = rt.enter();

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1100.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Kline Dashboard",
        options,
        Box::new(move |cc| Ok(run_app(cc, &args))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {}", e))
}

mod app;
mod color;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;

use app::AvocadashApp;
use avocadash::config::DashboardConfig;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::from_env();

    // Nothing is shown unless the dataset loads and prepares cleanly.
    let state = match load_state(&config.data_path) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Avocado Analytics",
        options,
        Box::new(|_cc| Ok(Box::new(AvocadashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}

fn load_state(path: &Path) -> Result<AppState> {
    let raw = avocadash::load_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let (dataset, options) = avocadash::prepare(raw)
        .with_context(|| format!("preparing {}", path.display()))?;
    log::info!(
        "{} records, years {:?}, types {:?}",
        dataset.len(),
        options.years.iter().map(|o| o.value).collect::<Vec<_>>(),
        options.product_types.iter().map(|o| o.value.as_str()).collect::<Vec<_>>()
    );
    Ok(AppState::new(dataset, options))
}

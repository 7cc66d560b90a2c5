// Birthday Clock Application
// Main entry point

use anyhow::{Context, Result};
use birthday_clock::models::settings::Settings;
use birthday_clock::services::settings::{default_settings_path, SettingsService};
use birthday_clock::ui_egui::BirthdayClockApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Birthday Clock");

    let settings = load_settings();

    // The tick task runs here; the UI thread only drains its queue
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .thread_name("birthday-clock-ticker")
        .build()
        .context("Failed to start tick runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Московское время")
            .with_inner_size(settings.window_size())
            .with_min_inner_size([320.0, 220.0])
            .with_fullscreen(settings.start_fullscreen),
        ..Default::default()
    };

    eframe::run_native(
        "Birthday Clock",
        options,
        Box::new(move |cc| Ok(Box::new(BirthdayClockApp::new(cc, &handle, &settings)))),
    )
    .map_err(|e| anyhow::anyhow!("UI exited with an error: {}", e))?;

    runtime.shutdown_background();
    Ok(())
}

fn load_settings() -> Settings {
    match default_settings_path() {
        Some(path) => SettingsService::new(path).load_or_default(),
        None => {
            log::warn!("No config directory available; using default settings");
            Settings::default()
        }
    }
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use api_caller::app::ApiCallerApp;
use api_caller::config::AppConfig;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let config = AppConfig::default();
    init_tracing(&config.log_filter);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..eframe::NativeOptions::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(|_cc| Ok(Box::new(ApiCallerApp::new(config)))),
    )
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

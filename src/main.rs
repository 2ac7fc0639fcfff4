// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use std::sync::Arc;

use arbitration_analyzer::app::ArbitrationApp;
use arbitration_analyzer::config::Settings;
use arbitration_analyzer::service::HttpAnalysisService;
use arbitration_analyzer::state::AnalysisController;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let settings_path = Settings::default_path();
    if let Some(path) = settings_path.as_deref().filter(|p| !p.exists()) {
        // First run: leave an editable copy of the defaults behind
        if let Err(e) = Settings::default().save(path) {
            tracing::warn!(path = %path.display(), error = %e, "Could not write default settings");
        }
    }
    let settings = Settings::load(settings_path.as_deref())?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let _guard = runtime.enter();

    let service = HttpAnalysisService::new(&settings.service)?;
    tracing::info!(endpoint = service.endpoint(), timeout_secs = settings.service.timeout_secs, "Analysis service configured");

    let controller = AnalysisController::new(
        Arc::new(service),
        runtime.handle().clone(),
        settings.service.timeout(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.ui.window_width, settings.ui.window_height])
            .with_title("Sigma Tech AI Assistant"),
        ..Default::default()
    };

    let ui_settings = settings.ui.clone();
    eframe::run_native(
        "Sigma Tech AI Assistant",
        options,
        Box::new(move |cc| Box::new(ArbitrationApp::new(cc, controller, &ui_settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

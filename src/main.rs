use anyhow::{anyhow, Context};
use std::sync::Arc;

use hwcompare::collaborator::GeminiClient;
use hwcompare::comparison::ComparisonRequester;
use hwcompare::config::{api_key_from_env, SettingsManager};
use hwcompare::log_collector::get_global_logs_path;
use hwcompare::ui::app::AppUI;
use hwcompare::ui::controller::AppController;
use hwcompare::ui::threading::AsyncBridge;
use hwcompare::LogCollector;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // =========================================================================
    // SETTINGS AND LOGGING
    // =========================================================================
    // Settings load before the logger exists, so their warnings go to stderr only
    let settings = SettingsManager::load();

    let log_dir = get_global_logs_path().map_err(|e| anyhow!(e))?;
    let log_collector = LogCollector::new(&log_dir, settings.level_filter(), true)
        .map_err(|e| anyhow!(e))
        .context("LogCollector initialization failed")?;
    log_collector
        .clone()
        .install()
        .map_err(|e| anyhow!(e))?;

    log::info!(
        "[Main] hwcompare {} starting, logging to {}",
        hwcompare::VERSION,
        log_collector.session_log_path().display()
    );
    log::info!(
        "[Main] model={} mode={:?} grounding={} timeout={}s",
        settings.model,
        settings.integration_mode,
        settings.search_grounding,
        settings.request_timeout_secs
    );

    // =========================================================================
    // COLLABORATOR, REQUESTER, CONTROLLER
    // =========================================================================
    let client = GeminiClient::from_settings(&settings, api_key_from_env())
        .context("Failed to create Gemini client")?;
    if client.has_credential() {
        log::info!("[Main] API credential found in environment");
    } else {
        log::warn!("[Main] No API credential set (GEMINI_API_KEY / API_KEY); comparisons will fail");
    }

    let requester = Arc::new(ComparisonRequester::new(Arc::new(client), settings.integration_mode));
    let (bridge, event_rx) = AsyncBridge::new();
    let controller = Arc::new(AppController::new(
        requester,
        bridge.event_tx,
        tokio::runtime::Handle::current(),
    ));

    // =========================================================================
    // LAUNCH EGUI
    // =========================================================================
    let app_ui = AppUI::new(controller, event_rx, settings.initial_mode);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Hardware Compare",
        options,
        Box::new(move |_cc| Box::new(app_ui)),
    );

    // =========================================================================
    // SHUTDOWN
    // =========================================================================
    log::info!("[Main] Shutting down");
    if let Err(e) = log_collector.wait_for_empty() {
        eprintln!("[Main] WARNING: Failed to flush logs: {}", e);
    }

    result.map_err(|e| anyhow!("UI exited with error: {}", e))
}

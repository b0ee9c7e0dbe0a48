//! Decarbonator Dashboard - Main Entry Point

use decarbonator_dashboard::{config, AppState, DecarbonatorApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,decarbonator_dashboard=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Decarbonator Dashboard");

    let app_state = AppState::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app_state.window_size)
            .with_min_inner_size(config::MIN_WINDOW_SIZE)
            .with_title("THE DECARBONATOR 3000"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Decarbonator Dashboard",
        native_options,
        Box::new(|cc| Ok(Box::new(DecarbonatorApp::new(cc, app_state)))),
    );

    tracing::info!("Shutting down...");

    result
}

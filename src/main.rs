//! Lexikid - interaction and feedback demo for young learners.
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lexikid v{}", env!("CARGO_PKG_VERSION"));

    // AccessKit is on by default in eframe, so the widget info set by every
    // control reaches platform screen readers.
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([480.0, 600.0])
            .with_title("Lexikid"),
        ..Default::default()
    };

    eframe::run_native(
        "Lexikid",
        options,
        Box::new(|cc| Ok(Box::new(app::LexikidApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))
}

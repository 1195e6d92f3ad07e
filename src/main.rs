//! Advisor Client - a business-location advisor chat UI built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for async HTTP requests to the
//!   advisor backend (/respond) and metadata service (/api/metadata)
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use advisor_client::app::AdvisorApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Business Location Advisor",
        options,
        Box::new(|cc| Ok(Box::new(AdvisorApp::new(cc)))),
    )
}

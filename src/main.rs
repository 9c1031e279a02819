//! Xiangqi GUI
//!
//! Two players share one window and take turns moving pieces.

use tracing_subscriber::EnvFilter;
use xiangqi::ui::{canvas_size, XiangqiApp, SIDE_PANEL_WIDTH};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let [width, height] = canvas_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width + SIDE_PANEL_WIDTH + 30.0, height + 20.0])
            .with_min_inner_size([width + SIDE_PANEL_WIDTH, height])
            .with_title("Xiangqi"),
        ..Default::default()
    };

    tracing::info!("starting Xiangqi");
    eframe::run_native(
        "Xiangqi",
        options,
        Box::new(|cc| Ok(Box::new(XiangqiApp::new(cc)))),
    )
}

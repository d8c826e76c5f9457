use std::path::PathBuf;

use floorplan_studio::FloorPlanApp;

const DEFAULT_LAYOUT_PATH: &str = "campus_layout.json";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let layout_path: PathBuf = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_LAYOUT_PATH.to_owned())
        .into();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Floorplan Studio",
        options,
        Box::new(move |cc| Ok(Box::new(FloorPlanApp::new(cc, layout_path)))),
    )
}

use std::path::PathBuf;
use swatchpick::{AppConfig, SwatchpickApp};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let initial_image_path: Option<PathBuf> = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Swatchpick — Image Color Picker",
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(SwatchpickApp::new_with_initial_path(
                config,
                initial_image_path.as_deref(),
            )))
        }),
    )
}

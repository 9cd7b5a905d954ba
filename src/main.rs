mod core;
mod gui;
mod video;

use eframe::egui;
use gui::MenuSwapApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 350.0])
            .with_title("Menu Video Swapper"),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Menu Video Swapper",
        options,
        Box::new(|cc| {
            match MenuSwapApp::new(cc) {
                Ok(app) => Ok(Box::new(app)),
                Err(e) => {
                    log::error!("Failed to initialize app: {}", e);
                    eprintln!("Failed to initialize app: {}", e);
                    std::process::exit(1);
                }
            }
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

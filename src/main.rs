mod app;
mod ui;

use app::BankDashboardApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bank Analysis Web Application",
        options,
        Box::new(|_cc| Ok(Box::new(BankDashboardApp::default()))),
    )
}

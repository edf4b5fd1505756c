use bank_dashboard::state::AppState;
use eframe::egui;

use crate::ui::{footer, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BankDashboardApp {
    pub state: AppState,
}

impl Default for BankDashboardApp {
    /// Start a session on the default remote dataset.
    fn default() -> Self {
        let mut state = AppState::default();
        state.load_default();
        Self { state }
    }
}

impl eframe::App for BankDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and notices ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: source and filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tables, charts, footer ----
        let frame = egui::Frame::central_panel(&ctx.style()).fill(self.state.background);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    table::raw_data(ui, &self.state);
                    plot::age_section(ui, &self.state);
                    plot::balance_section(ui, &self.state);
                    plot::job_section(ui, &self.state);
                    footer::footer(ui, &mut self.state);
                });
        });
    }
}

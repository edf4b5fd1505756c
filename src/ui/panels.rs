use bank_dashboard::data::filter::FilterParams;
use bank_dashboard::data::loader::{DataSource, SUPPORTED_EXTENSIONS};
use bank_dashboard::state::{AppState, Notice};
use eframe::egui::{self, Color32, RichText, Ui};

// ---------------------------------------------------------------------------
// Left side panel – source and filter widgets
// ---------------------------------------------------------------------------

/// Render the left panel: file upload, filters, page settings.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📁 Upload a file");
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Open…").clicked() {
            open_file_dialog(state);
        }
        if ui.button("Default source").clicked() {
            state.load_default();
        }
    });
    if let Some(label) = &state.source_label {
        ui.label(RichText::new(label).small());
    }

    ui.separator();
    ui.heading("Choose your filters:");

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let Some(params) = state.params.clone() else {
        ui.label("The dataset has no rows.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let jobs = dataset.jobs.clone();
    let balances: Vec<i64> = dataset.balances.iter().copied().collect();

    // ---- Job selector ----
    ui.strong("Select Job Title");
    egui::ComboBox::from_id_salt("job_select")
        .selected_text(&params.job)
        .show_ui(ui, |ui: &mut Ui| {
            for job in &jobs {
                if ui.selectable_label(params.job == *job, job).clicked() && params.job != *job {
                    state.set_job(job);
                }
            }
        });
    ui.add_space(8.0);

    // ---- Balance range selector ----
    ui.strong("Select a monetary range for customer balances");
    balance_range(ui, state, &params, &balances);

    ui.separator();
    ui.heading("Page Settings:");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Background Color");
        ui.color_edit_button_srgba(&mut state.background);
    });
    let [r, g, b, _] = state.background.to_array();
    ui.label(format!("The current color is #{r:02x}{g:02x}{b:02x}"));
}

/// Two sliders over the sorted distinct balances; the lower end never
/// passes the upper one.
fn balance_range(ui: &mut Ui, state: &mut AppState, params: &FilterParams, balances: &[i64]) {
    let last = balances.len().saturating_sub(1);
    let mut lo = balances.binary_search(&params.balance_min).unwrap_or(0);
    let mut hi = balances.binary_search(&params.balance_max).unwrap_or(last);

    let lo_changed = ui
        .add(egui::Slider::new(&mut lo, 0..=last).show_value(false).text("min"))
        .changed();
    let hi_changed = ui
        .add(egui::Slider::new(&mut hi, 0..=last).show_value(false).text("max"))
        .changed();

    if lo_changed && lo > hi {
        hi = lo;
    }
    if hi_changed && hi < lo {
        lo = hi;
    }

    ui.label(format!("{} – {}", balances[lo], balances[hi]));

    if lo_changed || hi_changed {
        state.set_balance_range(balances[lo], balances[hi]);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title, the filter warning and the latest notice.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Bank Analysis Web Application");
    ui.label(
        RichText::new("⚠ The data changes based on the filters applied!")
            .color(Color32::from_rgb(0xd9, 0x8c, 0x00)),
    );

    match &state.notice {
        Some(Notice::Success(msg)) => {
            ui.label(RichText::new(format!("✅ {msg}")).color(Color32::DARK_GREEN));
        }
        Some(Notice::Error(msg)) => {
            ui.label(RichText::new(format!("🚨 {msg}")).color(Color32::RED));
        }
        None => {}
    }

    if let (Some(ds), Some(view)) = (&state.dataset, &state.view) {
        ui.label(format!(
            "{} customers loaded, {} match the job, {} match job and balance",
            ds.len(),
            view.job_rows.len(),
            view.job_balance_rows.len()
        ));
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Upload a file")
        .add_filter("Supported files", &SUPPORTED_EXTENSIONS)
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx", "xls"])
        .pick_file();

    if let Some(path) = file {
        state.load(&DataSource::File(path));
    }
}

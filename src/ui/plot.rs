use bank_dashboard::color::generate_palette;
use bank_dashboard::data::aggregate::FrequencyTable;
use bank_dashboard::state::AppState;
use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use super::table;

const CHART_HEIGHT: f32 = 260.0;

fn series_colors() -> Vec<Color32> {
    generate_palette(3)
}

fn info(ui: &mut Ui) {
    ui.label(
        RichText::new(
            "🔥 You can download the data from the line series with the current filters using the tools below",
        )
        .italics(),
    );
}

/// Line chart of a numeric frequency table, ordered by key.
fn frequency_line(ui: &mut Ui, id: &str, x_label: &str, counts: &FrequencyTable, color: Color32) {
    let points: PlotPoints = counts.points().into();
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label("count")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("count").color(color).width(1.5));
        });
}

// ---------------------------------------------------------------------------
// Customers by age for the selected job
// ---------------------------------------------------------------------------

pub fn age_section(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(view)) = (&state.dataset, &state.view) else {
        return;
    };
    ui.add_space(16.0);
    ui.heading("Customers filtered by age based on Job Title");
    frequency_line(ui, "age_plot", "Age", &view.age_counts, series_colors()[0]);
    info(ui);
    table::view_expander(
        ui,
        "Tabular form of: Customers filtered by age based on Job Title",
        dataset,
        &view.job_rows,
        &view.age_export,
    );
}

// ---------------------------------------------------------------------------
// Customers by balance for the selected job and range
// ---------------------------------------------------------------------------

pub fn balance_section(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(view)) = (&state.dataset, &state.view) else {
        return;
    };
    ui.add_space(16.0);
    ui.heading("Customers filtered by Account Balance based on Job Title");
    frequency_line(ui, "balance_plot", "Balance", &view.balance_counts, series_colors()[1]);
    info(ui);
    table::view_expander(
        ui,
        "Tabular form of: Customers filtered by Account Balance based on Job Title",
        dataset,
        &view.job_balance_rows,
        &view.balance_export,
    );
}

// ---------------------------------------------------------------------------
// Customers per job, whole dataset
// ---------------------------------------------------------------------------

pub fn job_section(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        return;
    };
    ui.add_space(16.0);
    ui.heading("Customers filtered by Job Title");

    let bars: Vec<Bar> = view
        .job_counts
        .by_count()
        .into_iter()
        .enumerate()
        .map(|(i, (job, count))| Bar::new(i as f64, count as f64).name(job.to_string()).width(0.7))
        .collect();

    Plot::new("job_plot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("count")
        .show_x(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("count").color(series_colors()[2]));
        });

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (i, (job, count)) in view.job_counts.by_count().into_iter().enumerate() {
            ui.label(RichText::new(format!("{i}: {job} ({count})")).small());
        }
    });
}

use std::path::Path;

use anyhow::{Context, Result};
use bank_dashboard::color::{blues, text_on_blues, GradientScale};
use bank_dashboard::data::aggregate::ExportArtifact;
use bank_dashboard::data::model::Dataset;
use bank_dashboard::state::AppState;
use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 18.0;
const TABLE_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// Raw data
// ---------------------------------------------------------------------------

pub fn raw_data(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file or reload the default source to begin");
        });
        return;
    };
    ui.heading("Customers list - Raw data");
    let all: Vec<usize> = (0..dataset.len()).collect();
    rows_table(ui, "raw_table", dataset, &all, None);
}

// ---------------------------------------------------------------------------
// Filtered view: collapsible table + download
// ---------------------------------------------------------------------------

pub fn view_expander(ui: &mut Ui, title: &str, dataset: &Dataset, rows: &[usize], artifact: &ExportArtifact) {
    egui::CollapsingHeader::new(RichText::new(title).strong())
        .id_salt(&artifact.file_name)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            let scale = GradientScale::new(dataset, rows);
            rows_table(ui, &artifact.file_name, dataset, rows, Some(&scale));
            download_button(ui, artifact);
        });
}

/// Render `rows` of `dataset`; numeric cells are shaded when a scale is given.
fn rows_table(ui: &mut Ui, id: &str, dataset: &Dataset, rows: &[usize], scale: Option<&GradientScale>) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(scale.is_none())
            .max_scroll_height(TABLE_HEIGHT)
            .columns(Column::auto().at_least(60.0).resizable(true), dataset.columns.len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                for name in &dataset.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                    let record = &dataset.rows[rows[row.index()]];
                    for (col, cell) in record.cells.iter().enumerate() {
                        row.col(|ui: &mut Ui| {
                            match scale.and_then(|s| s.position(col, cell)) {
                                Some(t) => {
                                    ui.painter().rect_filled(ui.max_rect(), 0.0, blues(t));
                                    ui.label(RichText::new(cell).color(text_on_blues(t)));
                                }
                                None => {
                                    ui.label(cell);
                                }
                            }
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Downloads
// ---------------------------------------------------------------------------

fn download_button(ui: &mut Ui, artifact: &ExportArtifact) {
    let response = ui
        .button("Download Data")
        .on_hover_text("Click here to download the data as a CSV file");
    if !response.clicked() {
        return;
    }

    let Some(path) = rfd::FileDialog::new()
        .set_title("Download Data")
        .set_file_name(&artifact.file_name)
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };

    match save_artifact(&path, artifact) {
        Ok(()) => log::info!("Saved {} ({} bytes) to {}", artifact.file_name, artifact.bytes.len(), path.display()),
        Err(e) => log::error!("Failed to save download: {e:#}"),
    }
}

fn save_artifact(path: &Path, artifact: &ExportArtifact) -> Result<()> {
    std::fs::write(path, &artifact.bytes)
        .with_context(|| format!("writing {} ({})", path.display(), artifact.mime))
}

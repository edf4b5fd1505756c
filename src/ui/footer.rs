use bank_dashboard::state::AppState;
use eframe::egui::{self, Ui};

const TUTORIALS: [(&str, &str); 4] = [
    (
        "Real-Time Live Finance/Marketing/Data Science Dashboard in Python",
        "https://www.youtube.com/watch?v=OkodDZxsN1I",
    ),
    (
        "Streamlit Tutorial - 3 for beginners | line_chart, bar_chart, pyplot, map",
        "https://www.youtube.com/watch?v=HB0OlnX5K_U",
    ),
    (
        "Streamlit Tutorial - 4, input widgets: button, download_button, checkbox, radio, selectbox",
        "https://www.youtube.com/watch?v=K7vu6Yu6P9c",
    ),
    ("egui documentation", "https://docs.rs/egui"),
];

/// Tutorial links and the contact form.
pub fn footer(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(24.0);
    ui.separator();

    ui.columns(2, |cols| {
        cols[0].heading("Resources for building interactive dashboards like this one");
        for (i, (title, url)) in TUTORIALS.iter().enumerate() {
            cols[0].hyperlink_to(format!("{}. {title}", i + 1), *url);
        }

        let ui = &mut cols[1];
        ui.heading("Get In Touch With Us");
        let form = &mut state.contact;
        egui::Grid::new("contact_form").num_columns(2).show(ui, |ui: &mut Ui| {
            ui.label("Enter your name");
            ui.text_edit_singleline(&mut form.name);
            ui.end_row();
            ui.label("Enter your email");
            ui.text_edit_singleline(&mut form.email);
            ui.end_row();
            ui.label("Message");
            ui.text_edit_multiline(&mut form.message);
            ui.end_row();
        });
        ui.checkbox(&mut form.subscribe, "Subscribe me to your newsletter");
        if ui.button("Submit").clicked() {
            form.submit();
        }
    });
}

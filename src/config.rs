use eframe::egui::Color32;

/// Where the dashboard reads from when no file has been uploaded.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/Lexie88rus/bank-marketing-analysis/master/bank.csv";

/// Text encoding applied to CSV bytes before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

/// Static settings for a dashboard session.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub default_source_url: String,
    pub remote_encoding: TextEncoding,
    pub upload_encoding: TextEncoding,
    pub age_export_name: String,
    pub balance_export_name: String,
    pub export_mime: String,
    pub background: Color32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_source_url: DEFAULT_SOURCE_URL.to_string(),
            remote_encoding: TextEncoding::Utf8,
            upload_encoding: TextEncoding::Latin1,
            age_export_name: "customersByAge_basedOn_jobTitle.csv".to_string(),
            balance_export_name: "customersBalance_basedOn_jobTitle.csv".to_string(),
            export_mime: "text/csv".to_string(),
            background: Color32::from_rgb(0x00, 0xf9, 0x00),
        }
    }
}

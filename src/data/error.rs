use thiserror::Error;

/// Everything that can go wrong between picking a source and handing a
/// rendered view to the UI.
///
/// None of these are retried; the UI shows the message and keeps the last
/// good view on screen.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// File extension outside the csv / xlsx / xls allow-list.
    #[error("The selected file is not supported: .{extension} (expected csv, xlsx or xls)")]
    UnsupportedFormat { extension: String },

    /// Malformed tabular content.
    #[error("Could not parse {origin}: {reason}")]
    Parse { origin: String, reason: String },

    /// Remote fetch or local open failed.
    #[error("Data source unavailable ({origin}): {reason}")]
    SourceUnavailable { origin: String, reason: String },

    #[error("Invalid filter parameter: {0}")]
    InvalidFilterParameter(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Could not serialize CSV export: {0}")]
    Export(String),
}

impl DashboardError {
    pub(crate) fn parse(origin: impl Into<String>, reason: impl ToString) -> Self {
        DashboardError::Parse {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        DashboardError::SourceUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

use std::collections::BTreeMap;

use super::error::{DashboardError, Result};
use super::filter::FilteredView;
use super::model::CellValue;

// ---------------------------------------------------------------------------
// Frequency counts
// ---------------------------------------------------------------------------

/// Occurrences of each distinct value of one column within a view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    pub column: String,
    counts: BTreeMap<CellValue, usize>,
}

impl FrequencyTable {
    /// Count of `value`, zero when absent.
    pub fn get(&self, value: &CellValue) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Sum of all counts; equals the row count of the source view.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CellValue, usize)> {
        self.counts.iter().map(|(v, &c)| (v, c))
    }

    /// Entries by descending count, ties broken by ascending key.
    pub fn by_count(&self) -> Vec<(&CellValue, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// `[value, count]` pairs for numeric keys, in ascending key order.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.iter()
            .filter_map(|(v, c)| Some([v.as_f64()?, c as f64]))
            .collect()
    }
}

/// Count each distinct value of `column` across the rows of `view`.
pub fn frequency_count(view: &FilteredView<'_>, column: &str) -> Result<FrequencyTable> {
    let idx = view
        .dataset()
        .column_index(column)
        .ok_or_else(|| DashboardError::UnknownColumn(column.to_string()))?;

    let mut counts = BTreeMap::new();
    for row in view.rows() {
        *counts.entry(CellValue::infer(row.cells[idx].trim())).or_insert(0) += 1;
    }

    Ok(FrequencyTable {
        column: column.to_string(),
        counts,
    })
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Serialize a view as UTF-8 CSV: header row, then each row's cells verbatim.
/// No index column.
pub fn to_csv(view: &FilteredView<'_>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&view.dataset().columns)
        .map_err(|e| DashboardError::Export(e.to_string()))?;
    for row in view.rows() {
        writer
            .write_record(&row.cells)
            .map_err(|e| DashboardError::Export(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| DashboardError::Export(e.to_string()))
}

/// A downloadable file produced from a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn from_view(view: &FilteredView<'_>, file_name: &str, mime: &str) -> Result<Self> {
        Ok(Self {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes: to_csv(view)?,
        })
    }
}

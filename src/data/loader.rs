use std::io::Read;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};

use super::error::{DashboardError, Result};
use super::model::Dataset;
use crate::config::{DashboardConfig, TextEncoding};

/// File extensions accepted for uploads, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where a dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// CSV over HTTP(S).
    Remote(String),
    /// A user-supplied local file.
    File(PathBuf),
}

impl DataSource {
    pub fn default_remote(config: &DashboardConfig) -> Self {
        DataSource::Remote(config.default_source_url.clone())
    }

    /// Short label for messages: the URL, or the file name.
    pub fn describe(&self) -> String {
        match self {
            DataSource::Remote(url) => url.clone(),
            DataSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from `source`.
///
/// * `Remote` – fetched and parsed as CSV in the configured remote encoding
/// * `File`   – extension checked against [`SUPPORTED_EXTENSIONS`] first,
///   then `.csv` is parsed in the upload encoding and `.xlsx` / `.xls`
///   through the first worksheet
pub fn load(source: &DataSource, config: &DashboardConfig) -> Result<Dataset> {
    let dataset = match source {
        DataSource::Remote(url) => load_remote(url, config.remote_encoding)?,
        DataSource::File(path) => load_file(path, config.upload_encoding)?,
    };
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.len(),
        dataset.columns,
        source.describe()
    );
    Ok(dataset)
}

/// Validate a file's extension, returning it lower-cased.
pub fn check_extension(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(DashboardError::UnsupportedFormat { extension: ext })
    }
}

fn load_file(path: &Path, encoding: TextEncoding) -> Result<Dataset> {
    let ext = check_extension(path)?;
    let origin = path.display().to_string();

    match ext.as_str() {
        "csv" => {
            let bytes = std::fs::read(path).map_err(|e| DashboardError::unavailable(&origin, e))?;
            parse_csv_bytes(&origin, &bytes, encoding)
        }
        _ => load_workbook(path),
    }
}

fn load_remote(url: &str, encoding: TextEncoding) -> Result<Dataset> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| DashboardError::unavailable(url, e))?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| DashboardError::unavailable(url, e))?;

    parse_csv_bytes(url, &bytes, encoding)
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// Decode `bytes` and parse them as comma-separated text with a header row.
pub fn parse_csv_bytes(origin: &str, bytes: &[u8], encoding: TextEncoding) -> Result<Dataset> {
    let text = decode(origin, bytes, encoding)?;
    Dataset::from_csv_reader(origin, text.trim_start_matches('\u{feff}').as_bytes())
}

fn decode(origin: &str, bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes.to_vec())
            .map_err(|e| DashboardError::parse(origin, format!("invalid UTF-8: {e}"))),
        TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
    }
}

impl Dataset {
    /// Parse already-decoded CSV text with a header row.
    pub fn from_csv_reader<R: Read>(origin: &str, reader: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| DashboardError::parse(origin, e))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if columns.is_empty() {
            return Err(DashboardError::parse(origin, "no header row"));
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| DashboardError::parse(origin, e))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }

        Dataset::from_table(origin, columns, rows)
    }
}

// ---------------------------------------------------------------------------
// Spreadsheets
// ---------------------------------------------------------------------------

/// First worksheet only; its first row is the header.
fn load_workbook(path: &Path) -> Result<Dataset> {
    let origin = path.display().to_string();
    std::fs::metadata(path).map_err(|e| DashboardError::unavailable(&origin, e))?;

    let mut workbook = open_workbook_auto(path).map_err(|e| DashboardError::parse(&origin, e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DashboardError::parse(&origin, "workbook has no worksheets"))?
        .map_err(|e| DashboardError::parse(&origin, e))?;

    let mut sheet_rows = range.rows();
    let columns: Vec<String> = sheet_rows
        .next()
        .ok_or_else(|| DashboardError::parse(&origin, "no header row"))?
        .iter()
        .map(cell_text)
        .collect();

    let rows: Vec<Vec<String>> = sheet_rows.map(|r| r.iter().map(cell_text).collect()).collect();
    Dataset::from_table(&origin, columns, rows)
}

/// Render a worksheet cell as the text a CSV export of the sheet would hold.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // Spreadsheets store whole numbers as floats.
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
            format!("{}", *f as i64)
        }
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_allow_list() {
        assert_eq!(check_extension(Path::new("bank.csv")).unwrap(), "csv");
        assert_eq!(check_extension(Path::new("Bank.XLSX")).unwrap(), "xlsx");
        assert_eq!(check_extension(Path::new("old.xls")).unwrap(), "xls");

        for bad in ["report.pdf", "data.parquet", "noext", "archive.csv.gz"] {
            let err = check_extension(Path::new(bad)).unwrap_err();
            assert!(
                matches!(err, DashboardError::UnsupportedFormat { .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn latin1_bytes_decode_to_code_points() {
        let bytes = b"age,job,balance\n30,m\xe9canicien,5\n";
        let ds = parse_csv_bytes("test", bytes, TextEncoding::Latin1).unwrap();
        assert_eq!(ds.rows[0].job, "mécanicien");
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let bytes = b"age,job,balance\n30,m\xe9canicien,5\n";
        let err = parse_csv_bytes("test", bytes, TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, DashboardError::Parse { .. }));
    }

    #[test]
    fn bom_is_stripped_from_header() {
        let bytes = "\u{feff}age,job,balance\n30,admin.,1\n".as_bytes();
        let ds = parse_csv_bytes("test", bytes, TextEncoding::Utf8).unwrap();
        assert_eq!(ds.columns[0], "age");
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = parse_csv_bytes("test", b"", TextEncoding::Utf8).unwrap_err();
        assert!(err.to_string().contains("no header row"));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let bytes = b"age,job,balance\n30,admin.\n";
        let err = parse_csv_bytes("test", bytes, TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, DashboardError::Parse { .. }));
    }

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(cell_text(&Data::Float(30.0)), "30");
        assert_eq!(cell_text(&Data::Float(-50.0)), "-50");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::Empty), "");
    }

    #[test]
    fn describe_uses_file_name() {
        let src = DataSource::File(PathBuf::from("/tmp/uploads/bank.csv"));
        assert_eq!(src.describe(), "bank.csv");
    }
}

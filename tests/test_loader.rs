//! Integration tests for dataset loading

use std::path::PathBuf;

use bank_dashboard::config::DashboardConfig;
use bank_dashboard::data::loader::{load, DataSource};
use bank_dashboard::data::DashboardError;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_csv_upload() {
    let (_dir, path) = common::write_fixture("bank.csv", common::bank_csv().as_bytes());

    let ds = load(&DataSource::File(path), &DashboardConfig::default()).unwrap();

    assert_eq!(ds.len(), 6);
    assert_eq!(ds.columns.len(), 17);
    assert_eq!(ds.jobs, vec!["admin.", "technician", "retired"]);
    assert_eq!(ds.balance_bounds(), Some((-50, 3500)));
}

#[test]
fn test_upload_extension_is_case_insensitive() {
    let (_dir, path) = common::write_fixture("BANK.CSV", common::bank_csv().as_bytes());
    let ds = load(&DataSource::File(path), &DashboardConfig::default()).unwrap();
    assert_eq!(ds.len(), 6);
}

#[test]
fn test_pdf_upload_is_unsupported() {
    let (_dir, path) = common::write_fixture("report.pdf", common::bank_csv().as_bytes());

    let err = load(&DataSource::File(path), &DashboardConfig::default()).unwrap_err();

    match err {
        DashboardError::UnsupportedFormat { extension } => assert_eq!(extension, "pdf"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn test_uploads_are_read_as_latin1() {
    let mut bytes = b"age,job,balance\n33,".to_vec();
    bytes.extend_from_slice(b"ma\xeetre d'h\xf4tel");
    bytes.extend_from_slice(b",120\n");
    let (_dir, path) = common::write_fixture("latin1.csv", &bytes);

    let ds = load(&DataSource::File(path), &DashboardConfig::default()).unwrap();

    assert_eq!(ds.jobs, vec!["maître d'hôtel"]);
}

#[test]
fn test_header_only_file_is_an_empty_dataset() {
    let header = format!("{}\n", common::BANK_HEADER);
    let (_dir, path) = common::write_fixture("empty.csv", header.as_bytes());

    let ds = load(&DataSource::File(path), &DashboardConfig::default()).unwrap();

    assert!(ds.is_empty());
    assert!(ds.jobs.is_empty());
}

#[test]
fn test_missing_required_column_is_a_parse_error() {
    let (_dir, path) = common::write_fixture("nojob.csv", b"age,balance\n30,100\n");
    let err = load(&DataSource::File(path), &DashboardConfig::default()).unwrap_err();
    assert!(matches!(err, DashboardError::Parse { .. }));
    assert!(err.to_string().contains("job"));
}

#[test]
fn test_malformed_age_is_a_parse_error() {
    let (_dir, path) = common::write_fixture("badage.csv", b"age,job,balance\nthirty,admin.,100\n");
    let err = load(&DataSource::File(path), &DashboardConfig::default()).unwrap_err();
    assert!(matches!(err, DashboardError::Parse { .. }));
}

#[test]
fn test_load_xlsx_first_sheet() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bank.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in ["age", "job", "marital", "balance"].iter().enumerate() {
        sheet.write_string(0, col as u16, *name).unwrap();
    }
    let rows = [
        (30.0, "admin.", "married", 100.0),
        (41.0, "admin.", "single", -50.0),
        (30.0, "technician", "married", 200.0),
    ];
    for (i, (age, job, marital, balance)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, *age).unwrap();
        sheet.write_string(row, 1, *job).unwrap();
        sheet.write_string(row, 2, *marital).unwrap();
        sheet.write_number(row, 3, *balance).unwrap();
    }
    // Only the first worksheet is read.
    workbook.add_worksheet().write_string(0, 0, "ignored").unwrap();
    workbook.save(&path).unwrap();

    let ds = load(&DataSource::File(path), &DashboardConfig::default()).unwrap();

    assert_eq!(ds.columns, vec!["age", "job", "marital", "balance"]);
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.jobs, vec!["admin.", "technician"]);
    assert_eq!(ds.rows[1].age, 41);
    assert_eq!(ds.rows[1].balance, -50);
    assert_eq!(ds.rows[1].cells, vec!["41", "admin.", "single", "-50"]);
    assert_eq!(ds.balance_bounds(), Some((-50, 200)));
}

#[test]
fn test_corrupt_workbook_is_a_parse_error() {
    let (_dir, path) = common::write_fixture("bank.xlsx", b"this is not a zip archive");
    let err = load(&DataSource::File(path), &DashboardConfig::default()).unwrap_err();
    assert!(matches!(err, DashboardError::Parse { .. }), "{err:?}");
}

#[test]
fn test_missing_file_is_unavailable() {
    let config = DashboardConfig::default();
    for name in ["does-not-exist.csv", "does-not-exist.xlsx"] {
        let path = std::env::temp_dir().join("bank-dashboard-missing").join(name);
        let err = load(&DataSource::File(path), &config).unwrap_err();
        assert!(matches!(err, DashboardError::SourceUnavailable { .. }), "{name}: {err:?}");
    }
}

#[test]
fn test_unreachable_remote_is_unavailable() {
    let source = DataSource::Remote("http://127.0.0.1:9/bank.csv".to_string());
    let err = load(&source, &DashboardConfig::default()).unwrap_err();
    assert!(matches!(err, DashboardError::SourceUnavailable { .. }), "{err:?}");
}

#[test]
fn test_default_remote_points_at_bank_csv() {
    let source = DataSource::default_remote(&DashboardConfig::default());
    match source {
        DataSource::Remote(url) => assert!(url.ends_with("/bank.csv")),
        other => panic!("unexpected source {other:?}"),
    }
    assert_eq!(DataSource::File(PathBuf::from("x/y.csv")).describe(), "y.csv");
}

//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header of the public bank-marketing CSV.
pub const BANK_HEADER: &str = "age,job,marital,education,default,balance,housing,loan,contact,day,month,duration,campaign,pdays,previous,poutcome,deposit";

/// A small bank-marketing table:
/// - `admin.`: 3 rows, balances -50, 100, 100
/// - `technician`: 2 rows, balances 200, 0
/// - `retired`: 1 row, balance 3500
pub fn bank_csv() -> String {
    let rows = [
        "30,admin.,married,secondary,no,100,yes,no,unknown,5,may,261,1,-1,0,unknown,yes",
        "41,admin.,single,tertiary,no,-50,no,yes,cellular,6,may,151,2,-1,0,unknown,no",
        "30,technician,married,secondary,no,200,yes,no,unknown,5,jun,76,1,-1,0,unknown,yes",
        "55,admin.,divorced,primary,no,100,yes,no,telephone,7,jul,92,1,180,2,failure,no",
        "67,retired,married,primary,no,3500,no,no,cellular,8,aug,198,3,-1,0,unknown,yes",
        "30,technician,single,tertiary,yes,0,no,no,cellular,9,aug,139,1,-1,0,unknown,no",
    ];
    let mut csv = String::from(BANK_HEADER);
    csv.push('\n');
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}

/// Write `contents` to `name` inside a fresh temp dir.
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn write_fixture(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents).unwrap();
    drop(file);
    (temp_dir, path)
}

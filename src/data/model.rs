use std::collections::{BTreeSet, HashSet};
use std::fmt;

use super::error::{DashboardError, Result};

/// Columns every dataset must carry.
pub const JOB_COLUMN: &str = "job";
pub const BALANCE_COLUMN: &str = "balance";
pub const AGE_COLUMN: &str = "age";

// ---------------------------------------------------------------------------
// CellValue – inferred type of a single raw cell
// ---------------------------------------------------------------------------

/// The inferred type of a raw cell, used as a frequency key.
/// Totally ordered so it can live in `BTreeMap` / `BTreeSet`.
#[derive(Debug, Clone)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Null,
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Infer the narrowest type for a raw text cell.
    pub fn infer(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    /// Numeric view of the value, for charts and colour scales.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one customer row
// ---------------------------------------------------------------------------

/// One row of the source table.
///
/// `job`, `balance` and `age` are validated and typed at load time; `cells`
/// keeps every raw cell in schema order so exports reproduce the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub job: String,
    pub balance: i64,
    pub age: i64,
    pub cells: Vec<String>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table plus the domains the filter controls pick from.
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Column names in source order.
    pub columns: Vec<String>,
    pub rows: Vec<Record>,
    /// Distinct job values in order of first appearance.
    pub jobs: Vec<String>,
    /// Sorted distinct balance values.
    pub balances: BTreeSet<i64>,
}

impl Dataset {
    /// Build a dataset from a header and raw text rows, typing the required
    /// columns. `origin` names the source in error messages.
    pub fn from_table(origin: &str, columns: Vec<String>, raw_rows: Vec<Vec<String>>) -> Result<Self> {
        let position = |name: &str| {
            columns
                .iter()
                .position(|c| c.trim() == name)
                .ok_or_else(|| DashboardError::parse(origin, format!("missing required column '{name}'")))
        };
        let job_idx = position(JOB_COLUMN)?;
        let balance_idx = position(BALANCE_COLUMN)?;
        let age_idx = position(AGE_COLUMN)?;

        let mut rows = Vec::with_capacity(raw_rows.len());
        let mut jobs = Vec::new();
        let mut seen_jobs = HashSet::new();
        let mut balances = BTreeSet::new();

        for (row_no, cells) in raw_rows.into_iter().enumerate() {
            // Row numbers in messages are 1-based data rows (header excluded).
            let line = row_no + 1;
            if cells.len() != columns.len() {
                return Err(DashboardError::parse(
                    origin,
                    format!("row {line} has {} fields, header has {}", cells.len(), columns.len()),
                ));
            }

            let job = cells[job_idx].trim().to_string();
            if job.is_empty() {
                return Err(DashboardError::parse(origin, format!("row {line}: empty '{JOB_COLUMN}'")));
            }
            let balance = parse_int(origin, line, BALANCE_COLUMN, &cells[balance_idx])?;
            let age = parse_int(origin, line, AGE_COLUMN, &cells[age_idx])?;

            if seen_jobs.insert(job.clone()) {
                jobs.push(job.clone());
            }
            balances.insert(balance);
            rows.push(Record { job, balance, age, cells });
        }

        Ok(Dataset {
            columns,
            rows,
            jobs,
            balances,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.trim() == name)
    }

    /// Observed balance bounds, `None` for an empty dataset.
    pub fn balance_bounds(&self) -> Option<(i64, i64)> {
        Some((*self.balances.first()?, *self.balances.last()?))
    }
}

fn parse_int(origin: &str, line: usize, column: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        DashboardError::parse(origin, format!("row {line}: '{column}' value '{raw}' is not an integer"))
    })
}

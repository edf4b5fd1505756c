/// Data layer: core types, loading, filtering, counting and export.
///
/// Architecture:
/// ```text
///  remote URL / .csv / .xlsx / .xls
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch / read, check extension, parse → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  job / job + [min, max) balance → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  FrequencyTable per column, CSV bytes per view
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ pipeline  │  one DashboardView per (Dataset, FilterParams)
///   └──────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pipeline;

pub use error::{DashboardError, Result};

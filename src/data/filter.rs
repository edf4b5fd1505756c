use super::error::{DashboardError, Result};
use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Filter parameters: the user's current selection
// ---------------------------------------------------------------------------

/// Selected job and balance range.
///
/// The range is closed below and open above: a row passes when
/// `balance_min <= balance < balance_max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub job: String,
    pub balance_min: i64,
    pub balance_max: i64,
}

impl FilterParams {
    pub fn new(job: impl Into<String>, balance_min: i64, balance_max: i64) -> Self {
        Self {
            job: job.into(),
            balance_min,
            balance_max,
        }
    }

    /// First job in the dataset and its full balance range.
    /// `None` for an empty dataset.
    pub fn for_dataset(dataset: &Dataset) -> Option<Self> {
        let job = dataset.jobs.first()?;
        let (min, max) = dataset.balance_bounds()?;
        Some(Self::new(job.clone(), min, max))
    }

    /// Check every parameter against the dataset's domains.
    pub fn validate(&self, dataset: &Dataset) -> Result<()> {
        if !dataset.jobs.iter().any(|j| *j == self.job) {
            return Err(DashboardError::InvalidFilterParameter(format!(
                "job '{}' does not occur in the dataset",
                self.job
            )));
        }
        for bound in [self.balance_min, self.balance_max] {
            if !dataset.balances.contains(&bound) {
                return Err(DashboardError::InvalidFilterParameter(format!(
                    "balance {bound} does not occur in the dataset"
                )));
            }
        }
        if self.balance_min > self.balance_max {
            return Err(DashboardError::InvalidFilterParameter(format!(
                "balance range is inverted: {} > {}",
                self.balance_min, self.balance_max
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Filtered views
// ---------------------------------------------------------------------------

/// Rows of a dataset that passed a predicate, in source order.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    /// Every row of the dataset.
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            indices: (0..dataset.len()).collect(),
        }
    }

    fn matching(dataset: &'a Dataset, predicate: impl Fn(&Record) -> bool) -> Self {
        let indices = dataset
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| predicate(*row))
            .map(|(i, _)| i)
            .collect();
        Self { dataset, indices }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Positions of the selected rows in the source dataset.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let rows = &self.dataset.rows;
        self.indices.iter().map(move |&i| &rows[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Rows whose job equals `job`.
pub fn filter_by_job<'a>(dataset: &'a Dataset, job: &str) -> FilteredView<'a> {
    FilteredView::matching(dataset, |row| row.job == job)
}

/// Rows whose job equals `job` and whose balance lies in `[min, max)`.
pub fn filter_by_job_and_balance<'a>(
    dataset: &'a Dataset,
    job: &str,
    min: i64,
    max: i64,
) -> FilteredView<'a> {
    FilteredView::matching(dataset, |row| {
        row.job == job && row.balance >= min && row.balance < max
    })
}

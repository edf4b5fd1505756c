use super::aggregate::{frequency_count, ExportArtifact, FrequencyTable};
use super::error::Result;
use super::filter::{filter_by_job, filter_by_job_and_balance, FilterParams, FilteredView};
use super::model::{Dataset, AGE_COLUMN, BALANCE_COLUMN, JOB_COLUMN};
use crate::config::DashboardConfig;

/// Everything the presentation layer renders for one (dataset, params) pair.
///
/// Owns its data so the hosting layer can keep the last good view around
/// while a new one is computed.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub params: FilterParams,
    /// Row positions of the job view.
    pub job_rows: Vec<usize>,
    /// Row positions of the job-and-balance view.
    pub job_balance_rows: Vec<usize>,
    /// Ages within the job view.
    pub age_counts: FrequencyTable,
    /// Balances within the job-and-balance view.
    pub balance_counts: FrequencyTable,
    /// Jobs across the whole dataset.
    pub job_counts: FrequencyTable,
    pub age_export: ExportArtifact,
    pub balance_export: ExportArtifact,
}

/// Run the full filter → count → export pipeline. Nothing is cached.
pub fn compute(dataset: &Dataset, params: &FilterParams, config: &DashboardConfig) -> Result<DashboardView> {
    params.validate(dataset)?;

    let job_view = filter_by_job(dataset, &params.job);
    let job_balance_view =
        filter_by_job_and_balance(dataset, &params.job, params.balance_min, params.balance_max);

    Ok(DashboardView {
        params: params.clone(),
        job_rows: job_view.indices().to_vec(),
        job_balance_rows: job_balance_view.indices().to_vec(),
        age_counts: frequency_count(&job_view, AGE_COLUMN)?,
        balance_counts: frequency_count(&job_balance_view, BALANCE_COLUMN)?,
        job_counts: frequency_count(&FilteredView::all(dataset), JOB_COLUMN)?,
        age_export: ExportArtifact::from_view(&job_view, &config.age_export_name, &config.export_mime)?,
        balance_export: ExportArtifact::from_view(
            &job_balance_view,
            &config.balance_export_name,
            &config.export_mime,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::DashboardError;
    use crate::data::model::CellValue;

    fn sample() -> Dataset {
        Dataset::from_csv_reader(
            "sample",
            "age,job,balance\n30,admin.,100\n41,admin.,-50\n30,technician,200\n".as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn computes_all_derived_views() {
        let ds = sample();
        let config = DashboardConfig::default();
        let view = compute(&ds, &FilterParams::new("admin.", -50, 100), &config).unwrap();

        assert_eq!(view.job_rows, vec![0, 1]);
        assert_eq!(view.job_balance_rows, vec![1]);
        assert_eq!(view.age_counts.total(), 2);
        assert_eq!(view.balance_counts.get(&CellValue::Integer(-50)), 1);
        assert_eq!(view.job_counts.get(&CellValue::String("technician".into())), 1);
        assert_eq!(view.age_export.file_name, "customersByAge_basedOn_jobTitle.csv");
        assert_eq!(view.balance_export.file_name, "customersBalance_basedOn_jobTitle.csv");
        assert_eq!(view.balance_export.bytes, b"age,job,balance\n41,admin.,-50\n");
    }

    #[test]
    fn is_idempotent() {
        let ds = sample();
        let config = DashboardConfig::default();
        let params = FilterParams::new("technician", -50, 200);
        assert_eq!(
            compute(&ds, &params, &config).unwrap(),
            compute(&ds, &params, &config).unwrap()
        );
    }

    #[test]
    fn invalid_params_stop_the_pipeline() {
        let ds = sample();
        let err = compute(&ds, &FilterParams::new("admin.", 5, 100), &DashboardConfig::default())
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidFilterParameter(_)));
    }
}

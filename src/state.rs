use eframe::egui::Color32;

use crate::config::DashboardConfig;
use crate::data::filter::FilterParams;
use crate::data::loader::{self, DataSource};
use crate::data::model::Dataset;
use crate::data::pipeline::{compute, DashboardView};
use crate::data::DashboardError;

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Contact form (decorative: nothing is sent anywhere)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub subscribe: bool,
}

impl ContactForm {
    /// Accept the submission and clear the fields.
    pub fn submit(&mut self) {
        log::info!(
            "Contact form submitted (subscribe: {}); no delivery configured",
            self.subscribe
        );
        *self = ContactForm::default();
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The session owned by the hosting layer, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (None until the first load succeeds).
    pub dataset: Option<Dataset>,

    /// Label of the source the dataset came from.
    pub source_label: Option<String>,

    /// Current selection; reset whenever the dataset changes.
    pub params: Option<FilterParams>,

    /// Last successfully computed view.
    pub view: Option<DashboardView>,

    /// Most recent success / error message.
    pub notice: Option<Notice>,

    /// Background colour chosen in the side panel. Cosmetic only.
    pub background: Color32,

    pub contact: ContactForm,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            background: config.background,
            config,
            dataset: None,
            source_label: None,
            params: None,
            view: None,
            notice: None,
            contact: ContactForm::default(),
        }
    }

    /// Load from `source`. On failure the current dataset and view stay.
    pub fn load(&mut self, source: &DataSource) {
        match loader::load(source, &self.config) {
            Ok(dataset) => {
                self.source_label = Some(source.describe());
                self.set_dataset(dataset);
                if !matches!(self.notice, Some(Notice::Error(_))) {
                    self.notice = Some(Notice::Success(format!(
                        "Loaded {} customers from {}",
                        self.dataset.as_ref().map_or(0, Dataset::len),
                        source.describe()
                    )));
                }
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", source.describe());
                self.notice = Some(Notice::Error(e.to_string()));
            }
        }
    }

    /// Load the configured remote dataset.
    pub fn load_default(&mut self) {
        let source = DataSource::default_remote(&self.config);
        self.load(&source);
    }

    /// Ingest a newly loaded dataset, reset the selection and recompute.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.params = FilterParams::for_dataset(&dataset);
        self.dataset = Some(dataset);
        self.view = None;
        self.notice = None;
        self.recompute();
    }

    pub fn set_job(&mut self, job: &str) {
        let Some(mut candidate) = self.params.clone() else {
            return;
        };
        candidate.job = job.to_string();
        self.apply(candidate);
    }

    pub fn set_balance_range(&mut self, min: i64, max: i64) {
        let Some(mut candidate) = self.params.clone() else {
            return;
        };
        candidate.balance_min = min;
        candidate.balance_max = max;
        self.apply(candidate);
    }

    /// Rerun the pipeline for the current selection. On failure the previous
    /// view stays on screen.
    pub fn recompute(&mut self) {
        if let Some(params) = self.params.clone() {
            self.apply(params);
        }
    }

    /// Compute a view for `candidate`; the selection only changes on success.
    fn apply(&mut self, candidate: FilterParams) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        match compute(dataset, &candidate, &self.config) {
            Ok(view) => {
                self.params = Some(candidate);
                self.view = Some(view);
                if matches!(self.notice, Some(Notice::Error(_))) {
                    self.notice = None;
                }
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, e: DashboardError) {
        log::warn!("Recomputation failed: {e}");
        self.notice = Some(Notice::Error(e.to_string()));
    }
}

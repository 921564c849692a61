//! Dataset store
//!
//! The fixed mapping from dataset identifier to category labels that the
//! dashboard selects between. The store is built once at startup and passed
//! explicitly to everything that needs it - builders never reach for a
//! module-level global.

use serde::Serialize;
use thiserror::Error;

/// Number of sliders on the dashboard, mapped positionally to the first
/// four categories of the selected dataset.
pub const SLIDER_COUNT: usize = 4;

/// A named collection of category labels selectable via the dropdown
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dataset {
    /// Stable identifier used by the dropdown and the builders
    pub id: String,
    /// Human-readable label shown in the dropdown
    pub label: String,
    /// Ordered category labels; the first four map to the sliders
    pub categories: Vec<String>,
    /// Baseline values shipped with the dataset; the default dataset's
    /// baseline seeds the slider defaults
    pub baseline: Vec<u32>,
}

impl Dataset {
    /// Create a dataset definition
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        categories: &[&str],
        baseline: &[u32],
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            baseline: baseline.to_vec(),
        }
    }
}

/// Errors raised by dataset lookup
#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    /// The requested dataset id is not registered in the store.
    /// Unreachable through the served UI, which only offers valid options.
    #[error("Unknown dataset: {0}")]
    Unknown(String),
}

/// Read-only lookup table of the datasets available to the dashboard
///
/// Preserves insertion order so the dropdown enumerates datasets the way
/// they were registered. Immutable after construction.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    datasets: Vec<Dataset>,
}

impl DatasetStore {
    /// Create a store from a list of datasets
    ///
    /// The first dataset is the dropdown's default selection.
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self { datasets }
    }

    /// The two datasets the dashboard ships with
    pub fn builtin() -> Self {
        Self::new(vec![
            Dataset::new(
                "dataset1",
                "Dataset 1",
                &["A", "B", "C", "D"],
                &[10, 15, 7, 12],
            ),
            Dataset::new(
                "dataset2",
                "Dataset 2",
                &["A", "B", "C", "D"],
                &[5, 10, 15, 20],
            ),
        ])
    }

    /// Look up a dataset by id
    pub fn lookup(&self, id: &str) -> Result<&Dataset, DatasetError> {
        self.datasets
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DatasetError::Unknown(id.to_string()))
    }

    /// Iterate datasets in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.iter()
    }

    /// Id of the default selection (the first registered dataset)
    pub fn default_id(&self) -> &str {
        &self.datasets[0].id
    }

    /// Number of registered datasets
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::builtin()
    }
}

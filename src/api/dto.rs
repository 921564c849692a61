//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::charts::SliderValues;
use crate::figure::Figure;
use crate::reactive::{InputChange, Inputs, OutputUpdate, SliderId};

// ============================================
// INPUT DTOs
// ============================================

/// An input change posted by the dashboard page
///
/// Tagged by control id, e.g. `{"id": "slider-A", "value": 12}` or
/// `{"id": "data-selector", "value": "dataset2"}`. Unknown ids fail
/// deserialization, mirroring the fixed set of controls on the page.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "id", content = "value")]
pub enum InputChangeRequest {
    /// Dataset dropdown changed
    #[serde(rename = "data-selector")]
    DataSelector(String),
    /// Slider A moved
    #[serde(rename = "slider-A")]
    SliderA(u32),
    /// Slider B moved
    #[serde(rename = "slider-B")]
    SliderB(u32),
    /// Slider C moved
    #[serde(rename = "slider-C")]
    SliderC(u32),
    /// Slider D moved
    #[serde(rename = "slider-D")]
    SliderD(u32),
}

impl From<InputChangeRequest> for InputChange {
    fn from(req: InputChangeRequest) -> Self {
        match req {
            InputChangeRequest::DataSelector(id) => InputChange::Dataset(id),
            InputChangeRequest::SliderA(v) => InputChange::Slider(SliderId::A, v),
            InputChangeRequest::SliderB(v) => InputChange::Slider(SliderId::B, v),
            InputChangeRequest::SliderC(v) => InputChange::Slider(SliderId::C, v),
            InputChangeRequest::SliderD(v) => InputChange::Slider(SliderId::D, v),
        }
    }
}

// ============================================
// FIGURE DTOs
// ============================================

/// Figures for every output slot plus the inputs they were built from
#[derive(Debug, Serialize)]
pub struct FiguresResponse {
    /// Current input values
    pub inputs: InputsDto,
    /// One figure per graph region
    pub figures: Vec<FigureUpdateDto>,
}

impl FiguresResponse {
    /// Assemble a response from dispatcher output
    pub fn new(inputs: &Inputs, updates: Vec<OutputUpdate>) -> Self {
        Self {
            inputs: InputsDto {
                dataset: inputs.dataset_id.clone(),
                sliders: inputs.sliders,
            },
            figures: updates
                .into_iter()
                .map(|u| FigureUpdateDto {
                    id: u.output_id,
                    figure: u.figure,
                })
                .collect(),
        }
    }
}

/// Current input values as reported to clients
#[derive(Debug, Serialize)]
pub struct InputsDto {
    /// Selected dataset id
    pub dataset: String,
    /// Current slider values
    pub sliders: SliderValues,
}

/// A fresh figure for one graph region
#[derive(Debug, Serialize)]
pub struct FigureUpdateDto {
    /// Graph region id this figure replaces
    pub id: String,
    /// The chart description
    pub figure: Figure,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Number of datasets available to the dropdown
    pub datasets: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}

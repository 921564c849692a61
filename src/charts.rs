//! Chart builders
//!
//! The two pure functions at the heart of the dashboard. Each takes the
//! dataset store, the selected dataset id, and the four slider values, and
//! produces a fresh chart description. Deterministic, side-effect free, and
//! independent of each other - the dispatch layer may invoke them in any
//! order.
//!
//! Slider values arrive already range-constrained by the controls upstream;
//! the builders accept them as-is and perform no re-validation.

use serde::{Deserialize, Serialize};

use crate::datasets::{DatasetError, DatasetStore, SLIDER_COUNT};
use crate::figure::{Figure, FigureLayout, Trace};

/// Current value of each of the four sliders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SliderValues {
    /// Slider A
    pub a: u32,
    /// Slider B
    pub b: u32,
    /// Slider C
    pub c: u32,
    /// Slider D
    pub d: u32,
}

impl SliderValues {
    /// Create slider values
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Values in slider order, positional to the first four categories
    pub fn to_vec(self) -> Vec<u32> {
        vec![self.a, self.b, self.c, self.d]
    }
}

/// Build the line chart description
///
/// One scatter trace over the selected dataset's categories, rendered as
/// connected points with markers. The trace is named after the dataset id.
pub fn line_chart(
    store: &DatasetStore,
    dataset_id: &str,
    values: SliderValues,
) -> Result<Figure, DatasetError> {
    let dataset = store.lookup(dataset_id)?;
    let categories = dataset.categories[..SLIDER_COUNT].to_vec();

    Ok(Figure::single(
        Trace::Scatter {
            x: categories,
            y: values.to_vec(),
            mode: "lines+markers".to_string(),
            name: dataset_id.to_string(),
        },
        FigureLayout::with_axes("Line Chart", "Category", "Values"),
    ))
}

/// Build the pie chart description
///
/// Slice labels are the dataset's categories, slice sizes the slider
/// values. All-zero values yield a degenerate all-zero pie; rendering that
/// case is the charting layer's concern, no zero-sum guard here.
pub fn pie_chart(
    store: &DatasetStore,
    dataset_id: &str,
    values: SliderValues,
) -> Result<Figure, DatasetError> {
    let dataset = store.lookup(dataset_id)?;
    let categories = dataset.categories[..SLIDER_COUNT].to_vec();

    Ok(Figure::single(
        Trace::Pie {
            labels: categories,
            values: values.to_vec(),
            name: dataset_id.to_string(),
        },
        FigureLayout::titled("Pie Chart"),
    ))
}

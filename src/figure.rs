//! Chart descriptions
//!
//! Serializable value objects describing a chart: one or more traces plus
//! layout (title, axis titles). Produced fresh by the builders on every
//! update and handed to the rendering layer as JSON; never mutated in
//! place. The JSON shape matches what plotly.js consumes, so the dashboard
//! page can pass a figure straight through to `Plotly.react`.

use serde::Serialize;

/// A complete chart description: traces plus layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    /// Data traces drawn in this chart
    pub data: Vec<Trace>,
    /// Titles and axis configuration
    pub layout: FigureLayout,
}

impl Figure {
    /// Create a figure with a single trace
    pub fn single(trace: Trace, layout: FigureLayout) -> Self {
        Self {
            data: vec![trace],
            layout,
        }
    }
}

/// A single data trace
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Connected points over categories (line chart)
    Scatter {
        /// Category labels along the x axis
        x: Vec<String>,
        /// Values, parallel to `x`
        y: Vec<u32>,
        /// Draw mode, e.g. "lines+markers"
        mode: String,
        /// Series name shown in legend and hover
        name: String,
    },
    /// Proportional slices (pie chart)
    Pie {
        /// Slice labels
        labels: Vec<String>,
        /// Slice sizes, parallel to `labels`
        values: Vec<u32>,
        /// Series name shown in hover
        name: String,
    },
}

impl Trace {
    /// Category labels of this trace (x labels or slice labels)
    pub fn categories(&self) -> &[String] {
        match self {
            Trace::Scatter { x, .. } => x,
            Trace::Pie { labels, .. } => labels,
        }
    }

    /// Numeric values of this trace (y values or slice sizes)
    pub fn values(&self) -> &[u32] {
        match self {
            Trace::Scatter { y, .. } => y,
            Trace::Pie { values, .. } => values,
        }
    }
}

/// Figure layout: title plus optional axis titles
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigureLayout {
    /// Chart title
    pub title: Title,
    /// X axis configuration (absent for pie charts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Y axis configuration (absent for pie charts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl FigureLayout {
    /// Layout with a title only (pie charts)
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Title::new(title),
            xaxis: None,
            yaxis: None,
        }
    }

    /// Layout with a title and both axis titles (line charts)
    pub fn with_axes(
        title: impl Into<String>,
        xaxis: impl Into<String>,
        yaxis: impl Into<String>,
    ) -> Self {
        Self {
            title: Title::new(title),
            xaxis: Some(Axis::titled(xaxis)),
            yaxis: Some(Axis::titled(yaxis)),
        }
    }
}

/// Chart or axis title text
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    /// Title text
    pub text: String,
}

impl Title {
    /// Create a title
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Axis configuration
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    /// Axis title
    pub title: Title,
}

impl Axis {
    /// Create an axis with a title
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

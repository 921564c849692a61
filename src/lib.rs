//! # Chartboard
//!
//! Interactive Line & Pie Charts - a small reactive dashboard served over
//! HTTP. A dropdown selects one of two fixed datasets, four sliders adjust
//! four values, and two charts re-render on every change.
//!
//! ## Modules
//!
//! - [`datasets`]: Read-only dataset store injected into the builders
//! - [`figure`]: Serializable chart descriptions
//! - [`charts`]: The two pure builder functions (line, pie)
//! - [`layout`]: Declarative control tree and HTML rendering
//! - [`reactive`]: Input state plus output bindings, dispatched per change
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use chartboard::charts::{line_chart, SliderValues};
//! use chartboard::datasets::DatasetStore;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DatasetStore::builtin();
//!
//!     // Build a chart description from the five inputs
//!     let figure = line_chart(&store, "dataset1", SliderValues::new(10, 15, 7, 12))?;
//!
//!     println!("{}", serde_json::to_string_pretty(&figure)?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod datasets;
pub mod figure;
pub mod layout;
pub mod reactive;

// Re-export top-level types for convenience
pub use charts::{line_chart, pie_chart, SliderValues};

pub use datasets::{Dataset, DatasetError, DatasetStore, SLIDER_COUNT};

pub use figure::{Axis, Figure, FigureLayout, Title, Trace};

pub use layout::{Component, DropdownOption};

pub use reactive::{Dispatcher, InputChange, Inputs, OutputUpdate, SliderId};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};

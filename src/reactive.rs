//! Reactive dispatch
//!
//! Explicit observer structure replacing a framework-managed callback
//! graph: the dispatcher owns the current value of the five inputs (dataset
//! selection plus four sliders) and an ordered list of output bindings.
//! Applying an input change records the new value and re-invokes every
//! binding with the full current inputs, yielding one fresh chart
//! description per output slot.
//!
//! Builders stay pure and UI-free, so the whole update path is unit
//! testable without any UI harness. Dispatch is synchronous; the HTTP
//! layer serializes updates per session.

use crate::charts::{line_chart, pie_chart, SliderValues};
use crate::datasets::{DatasetError, DatasetStore, SLIDER_COUNT};
use crate::figure::Figure;
use crate::layout::{self, LINE_CHART_ID, PIE_CHART_ID, SLIDER_MAX, SLIDER_MIN};
use std::sync::Arc;

/// The four sliders, in positional order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderId {
    /// slider-A
    A,
    /// slider-B
    B,
    /// slider-C
    C,
    /// slider-D
    D,
}

impl SliderId {
    /// All sliders in positional order
    pub fn all() -> [SliderId; SLIDER_COUNT] {
        [SliderId::A, SliderId::B, SliderId::C, SliderId::D]
    }

    /// The element id of this slider in the layout
    pub fn element_id(&self) -> &'static str {
        match self {
            SliderId::A => "slider-A",
            SliderId::B => "slider-B",
            SliderId::C => "slider-C",
            SliderId::D => "slider-D",
        }
    }
}

/// A change to one of the five inputs
#[derive(Debug, Clone, PartialEq)]
pub enum InputChange {
    /// The dropdown selected a different dataset
    Dataset(String),
    /// A slider moved to a new value
    Slider(SliderId, u32),
}

/// Current value of all five inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    /// Selected dataset id
    pub dataset_id: String,
    /// Current slider values
    pub sliders: SliderValues,
}

impl Inputs {
    /// Inputs as the dashboard first presents them: default dataset
    /// selected, sliders at the default dataset's baseline
    pub fn dashboard_defaults(store: &DatasetStore) -> Self {
        let [a, b, c, d] = layout::default_slider_values(store);
        Self {
            dataset_id: store.default_id().to_string(),
            sliders: SliderValues::new(a, b, c, d),
        }
    }
}

/// A builder bound to an output slot
type BoundBuilder =
    Box<dyn Fn(&DatasetStore, &Inputs) -> Result<Figure, DatasetError> + Send + Sync>;

struct Binding {
    output_id: String,
    builder: BoundBuilder,
}

/// One refreshed output produced by a dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct OutputUpdate {
    /// Id of the graph region this figure replaces
    pub output_id: String,
    /// The freshly built chart description
    pub figure: Figure,
}

/// Owns the current inputs and fans each change out to every bound output
///
/// Plays the role the reactive framework played in a declarative UI stack:
/// it tracks which outputs depend on the inputs and re-invokes their
/// builders on every change. Here the dependency set is total - all
/// outputs depend on all five inputs - so dispatch is a plain fan-out.
pub struct Dispatcher {
    store: Arc<DatasetStore>,
    inputs: Inputs,
    bindings: Vec<Binding>,
}

impl Dispatcher {
    /// Create a dispatcher with no bindings
    pub fn new(store: Arc<DatasetStore>, inputs: Inputs) -> Self {
        Self {
            store,
            inputs,
            bindings: Vec::new(),
        }
    }

    /// Dispatcher with the two standard outputs bound (line and pie chart)
    /// and inputs seeded from the dashboard defaults
    pub fn standard(store: Arc<DatasetStore>) -> Self {
        let inputs = Inputs::dashboard_defaults(&store);
        let mut dispatcher = Self::new(store, inputs);
        dispatcher.bind(LINE_CHART_ID, |store, inputs| {
            line_chart(store, &inputs.dataset_id, inputs.sliders)
        });
        dispatcher.bind(PIE_CHART_ID, |store, inputs| {
            pie_chart(store, &inputs.dataset_id, inputs.sliders)
        });
        dispatcher
    }

    /// Bind a builder to an output slot
    ///
    /// The builder is re-invoked with the full current inputs on every
    /// change to any input.
    pub fn bind(
        &mut self,
        output_id: impl Into<String>,
        builder: impl Fn(&DatasetStore, &Inputs) -> Result<Figure, DatasetError> + Send + Sync + 'static,
    ) {
        self.bindings.push(Binding {
            output_id: output_id.into(),
            builder: Box::new(builder),
        });
    }

    /// Current input values
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// The dataset store bound into this dispatcher
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Apply an input change and refresh every output
    ///
    /// Slider changes are clamped to the control's range, the same
    /// constraint the slider itself enforces in the page. A dataset change
    /// replaces only the selection - slider values persist untouched, so
    /// switching datasets changes label sequences but never the numbers.
    pub fn apply(&mut self, change: InputChange) -> Result<Vec<OutputUpdate>, DatasetError> {
        match change {
            InputChange::Dataset(id) => {
                // Validate before recording so a bad id leaves state intact
                self.store.lookup(&id)?;
                self.inputs.dataset_id = id;
            }
            InputChange::Slider(slider, value) => {
                let value = value.clamp(SLIDER_MIN, SLIDER_MAX);
                let sliders = &mut self.inputs.sliders;
                match slider {
                    SliderId::A => sliders.a = value,
                    SliderId::B => sliders.b = value,
                    SliderId::C => sliders.c = value,
                    SliderId::D => sliders.d = value,
                }
            }
        }
        self.refresh()
    }

    /// Re-invoke every binding with the current inputs
    ///
    /// Used for the initial render and after every applied change.
    pub fn refresh(&self) -> Result<Vec<OutputUpdate>, DatasetError> {
        self.bindings
            .iter()
            .map(|binding| {
                let figure = (binding.builder)(&self.store, &self.inputs)?;
                Ok(OutputUpdate {
                    output_id: binding.output_id.clone(),
                    figure,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Trace;

    fn dispatcher() -> Dispatcher {
        Dispatcher::standard(Arc::new(DatasetStore::builtin()))
    }

    #[test]
    fn test_standard_defaults() {
        let d = dispatcher();
        assert_eq!(d.inputs().dataset_id, "dataset1");
        assert_eq!(d.inputs().sliders, SliderValues::new(10, 15, 7, 12));
    }

    #[test]
    fn test_initial_refresh_produces_both_outputs() {
        let updates = dispatcher().refresh().unwrap();
        let ids: Vec<&str> = updates.iter().map(|u| u.output_id.as_str()).collect();
        assert_eq!(ids, vec![LINE_CHART_ID, PIE_CHART_ID]);

        // Concrete scenario: defaults on dataset1
        for update in &updates {
            assert_eq!(update.figure.data[0].categories(), ["A", "B", "C", "D"]);
            assert_eq!(update.figure.data[0].values(), [10, 15, 7, 12]);
        }
        assert_eq!(updates[0].figure.layout.title.text, "Line Chart");
        assert_eq!(updates[1].figure.layout.title.text, "Pie Chart");
    }

    #[test]
    fn test_slider_change_refreshes_both_outputs() {
        let mut d = dispatcher();
        let updates = d.apply(InputChange::Slider(SliderId::C, 30)).unwrap();
        assert_eq!(updates.len(), 2);
        for update in updates {
            assert_eq!(update.figure.data[0].values(), [10, 15, 30, 12]);
        }
    }

    #[test]
    fn test_dataset_switch_keeps_slider_values() {
        let mut d = dispatcher();
        d.apply(InputChange::Slider(SliderId::A, 3)).unwrap();
        let updates = d
            .apply(InputChange::Dataset("dataset2".to_string()))
            .unwrap();

        // Only the selection moved; slider state survives the switch
        assert_eq!(d.inputs().dataset_id, "dataset2");
        assert_eq!(d.inputs().sliders, SliderValues::new(3, 15, 7, 12));
        for update in updates {
            assert_eq!(update.figure.data[0].values(), [3, 15, 7, 12]);
            match &update.figure.data[0] {
                Trace::Scatter { name, .. } | Trace::Pie { name, .. } => {
                    assert_eq!(name, "dataset2");
                }
            }
        }
    }

    #[test]
    fn test_slider_change_is_clamped() {
        let mut d = dispatcher();
        d.apply(InputChange::Slider(SliderId::B, 99)).unwrap();
        assert_eq!(d.inputs().sliders.b, SLIDER_MAX);
    }

    #[test]
    fn test_unknown_dataset_leaves_state_intact() {
        let mut d = dispatcher();
        let err = d
            .apply(InputChange::Dataset("dataset9".to_string()))
            .unwrap_err();
        assert_eq!(err, DatasetError::Unknown("dataset9".to_string()));
        assert_eq!(d.inputs().dataset_id, "dataset1");
    }

    #[test]
    fn test_all_zero_sliders() {
        let mut d = dispatcher();
        d.apply(InputChange::Dataset("dataset2".to_string())).unwrap();
        for slider in SliderId::all() {
            d.apply(InputChange::Slider(slider, 0)).unwrap();
        }
        let updates = d.refresh().unwrap();
        for update in updates {
            assert_eq!(update.figure.data[0].values(), [0, 0, 0, 0]);
            assert_eq!(update.figure.data[0].categories(), ["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn test_binding_order_is_immaterial() {
        // Same inputs through two dispatchers with opposite binding order
        let store = Arc::new(DatasetStore::builtin());
        let inputs = Inputs::dashboard_defaults(&store);

        let mut forward = Dispatcher::new(Arc::clone(&store), inputs.clone());
        forward.bind(LINE_CHART_ID, |s, i| line_chart(s, &i.dataset_id, i.sliders));
        forward.bind(PIE_CHART_ID, |s, i| pie_chart(s, &i.dataset_id, i.sliders));

        let mut reverse = Dispatcher::new(store, inputs);
        reverse.bind(PIE_CHART_ID, |s, i| pie_chart(s, &i.dataset_id, i.sliders));
        reverse.bind(LINE_CHART_ID, |s, i| line_chart(s, &i.dataset_id, i.sliders));

        let mut forward_updates = forward.refresh().unwrap();
        let mut reverse_updates = reverse.refresh().unwrap();
        forward_updates.sort_by(|x, y| x.output_id.cmp(&y.output_id));
        reverse_updates.sort_by(|x, y| x.output_id.cmp(&y.output_id));
        assert_eq!(forward_updates, reverse_updates);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let d = dispatcher();
        assert_eq!(d.refresh().unwrap(), d.refresh().unwrap());
    }
}

//! Dashboard layout
//!
//! Declarative description of the dashboard's controls: a heading, the
//! dataset dropdown, four value sliders, and two graph regions. The tree is
//! static configuration - it is built once from the dataset store, served
//! as JSON for programmatic consumers, and rendered to HTML for the
//! dashboard page.

use serde::Serialize;

use crate::datasets::{DatasetStore, SLIDER_COUNT};

/// Element id of the dataset dropdown
pub const DATASET_SELECTOR_ID: &str = "data-selector";
/// Element id of the line chart region
pub const LINE_CHART_ID: &str = "line-chart";
/// Element id of the pie chart region
pub const PIE_CHART_ID: &str = "pie-chart";

/// Slider range lower bound
pub const SLIDER_MIN: u32 = 0;
/// Slider range upper bound
pub const SLIDER_MAX: u32 = 30;
/// Slider step
pub const SLIDER_STEP: u32 = 1;
/// Tick mark spacing along the slider
pub const SLIDER_MARK_STEP: u32 = 5;

/// Ids of the four sliders, in positional order
pub const SLIDER_IDS: [&str; SLIDER_COUNT] = ["slider-A", "slider-B", "slider-C", "slider-D"];

/// Labels shown next to the four sliders
pub const SLIDER_LABELS: [&str; SLIDER_COUNT] = ["Adjust A", "Adjust B", "Adjust C", "Adjust D"];

/// Page heading
pub const PAGE_TITLE: &str = "Interactive Line & Pie Charts";

/// One node in the dashboard's control tree
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    /// Page heading
    Heading {
        /// Heading text
        text: String,
    },
    /// Single-select dropdown
    Dropdown {
        /// Element id
        id: String,
        /// Currently selected option value
        value: String,
        /// Whether the selection can be cleared
        clearable: bool,
        /// Options in display order
        options: Vec<DropdownOption>,
    },
    /// Labelled integer slider
    Slider {
        /// Element id
        id: String,
        /// Label shown next to the control
        label: String,
        /// Range lower bound
        min: u32,
        /// Range upper bound
        max: u32,
        /// Step between values
        step: u32,
        /// Current value
        value: u32,
        /// Tick mark positions
        marks: Vec<u32>,
    },
    /// Chart display region
    Graph {
        /// Element id, also the output slot the dispatcher writes to
        id: String,
        /// Rough share of the viewport width, in percent
        width_pct: u32,
    },
    /// Vertical grouping of children
    Section {
        /// Child components, top to bottom
        children: Vec<Component>,
    },
    /// Horizontal grouping of children
    Row {
        /// Child components, left to right
        children: Vec<Component>,
    },
}

/// One entry in a dropdown
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownOption {
    /// Text shown to the user
    pub label: String,
    /// Value submitted on selection
    pub value: String,
}

/// Tick mark positions for the sliders: every 5 from 0 through 30
pub fn slider_marks() -> Vec<u32> {
    (SLIDER_MIN..=SLIDER_MAX)
        .step_by(SLIDER_MARK_STEP as usize)
        .collect()
}

/// Default slider values, seeded from the default dataset's baseline
pub fn default_slider_values(store: &DatasetStore) -> [u32; SLIDER_COUNT] {
    let dataset = store
        .lookup(store.default_id())
        .expect("default dataset is always registered");
    let mut values = [0; SLIDER_COUNT];
    values.copy_from_slice(&dataset.baseline[..SLIDER_COUNT]);
    values
}

/// Build the dashboard's control tree
///
/// Heading, dataset dropdown, the four sliders, then the two chart regions
/// side by side at roughly half the viewport width each.
pub fn dashboard(store: &DatasetStore) -> Component {
    let defaults = default_slider_values(store);

    let sliders = SLIDER_IDS
        .iter()
        .zip(SLIDER_LABELS.iter())
        .zip(defaults.iter())
        .map(|((id, label), value)| Component::Slider {
            id: id.to_string(),
            label: label.to_string(),
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            step: SLIDER_STEP,
            value: *value,
            marks: slider_marks(),
        })
        .collect();

    Component::Section {
        children: vec![
            Component::Heading {
                text: PAGE_TITLE.to_string(),
            },
            Component::Dropdown {
                id: DATASET_SELECTOR_ID.to_string(),
                value: store.default_id().to_string(),
                clearable: false,
                options: store
                    .iter()
                    .map(|d| DropdownOption {
                        label: d.label.clone(),
                        value: d.id.clone(),
                    })
                    .collect(),
            },
            Component::Section { children: sliders },
            Component::Row {
                children: vec![
                    Component::Graph {
                        id: LINE_CHART_ID.to_string(),
                        width_pct: 48,
                    },
                    Component::Graph {
                        id: PIE_CHART_ID.to_string(),
                        width_pct: 48,
                    },
                ],
            },
        ],
    }
}

/// Render a component tree to HTML
///
/// Produces the control markup for the dashboard page; the page shell
/// around it (styles, chart wiring) lives in the page route.
pub fn render_html(component: &Component) -> String {
    let mut out = String::new();
    render_into(component, &mut out);
    out
}

fn render_into(component: &Component, out: &mut String) {
    match component {
        Component::Heading { text } => {
            out.push_str(&format!("<h1>{}</h1>\n", escape(text)));
        }
        Component::Dropdown {
            id,
            value,
            options,
            ..
        } => {
            out.push_str(&format!("<select id=\"{}\" class=\"control\">\n", escape(id)));
            for opt in options {
                let selected = if &opt.value == value { " selected" } else { "" };
                out.push_str(&format!(
                    "  <option value=\"{}\"{}>{}</option>\n",
                    escape(&opt.value),
                    selected,
                    escape(&opt.label)
                ));
            }
            out.push_str("</select>\n");
        }
        Component::Slider {
            id,
            label,
            min,
            max,
            step,
            value,
            marks,
        } => {
            out.push_str(&format!(
                "<label for=\"{}\">{}</label>\n",
                escape(id),
                escape(label)
            ));
            out.push_str(&format!(
                "<input type=\"range\" id=\"{id}\" class=\"control\" min=\"{min}\" max=\"{max}\" step=\"{step}\" value=\"{value}\" list=\"{id}-marks\">\n",
                id = escape(id),
            ));
            out.push_str(&format!("<datalist id=\"{}-marks\">\n", escape(id)));
            for mark in marks {
                out.push_str(&format!(
                    "  <option value=\"{mark}\" label=\"{mark}\"></option>\n"
                ));
            }
            out.push_str("</datalist>\n");
        }
        Component::Graph { id, width_pct } => {
            out.push_str(&format!(
                "<div id=\"{}\" class=\"graph\" style=\"width:{}%\"></div>\n",
                escape(id),
                width_pct
            ));
        }
        Component::Section { children } => {
            out.push_str("<div class=\"section\">\n");
            for child in children {
                render_into(child, out);
            }
            out.push_str("</div>\n");
        }
        Component::Row { children } => {
            out.push_str("<div class=\"row\">\n");
            for child in children {
                render_into(child, out);
            }
            out.push_str("</div>\n");
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

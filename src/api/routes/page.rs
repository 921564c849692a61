//! Dashboard Page Route
//!
//! - GET / - The dashboard itself: an HTML shell around the
//!   server-rendered control tree, with plotly.js as the rendering layer
//!
//! The page fetches the initial figures, then posts every control change
//! to `/api/v1/inputs` and redraws both charts from the response. All
//! update logic stays on the server; the page is plain wiring.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout;

/// HTML shell around the rendered control tree
const PAGE_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>Interactive Line & Pie Charts</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
<style>
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0 auto; max-width: 1100px; padding: 16px; color: #222; }
h1 { font-size: 24px; }
label { display: block; margin-top: 12px; font-size: 14px; }
select.control { min-width: 220px; padding: 4px; margin-top: 4px; }
input.control { width: 100%; }
.row { display: flex; justify-content: space-between; margin-top: 16px; }
.graph { min-height: 420px; }
</style>
</head>
<body>
%CONTROLS%
<script>
const INPUTS_URL = '/api/v1/inputs';
const FIGURES_URL = '/api/v1/figures';
const SLIDER_IDS = ['slider-A', 'slider-B', 'slider-C', 'slider-D'];

function render(payload) {
  for (const f of payload.figures) {
    Plotly.react(f.id, f.figure.data, f.figure.layout);
  }
}

async function postInput(id, value) {
  const res = await fetch(INPUTS_URL, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ id: id, value: value })
  });
  if (res.ok) {
    render(await res.json());
  }
}

async function init() {
  const res = await fetch(FIGURES_URL);
  if (res.ok) {
    render(await res.json());
  }

  document.getElementById('data-selector').addEventListener('change', (e) => {
    postInput('data-selector', e.target.value);
  });
  for (const id of SLIDER_IDS) {
    document.getElementById(id).addEventListener('input', (e) => {
      postInput(id, parseInt(e.target.value, 10));
    });
  }
}

document.addEventListener('DOMContentLoaded', init);
</script>
</body>
</html>
"#;

/// GET /
///
/// Serve the dashboard page with the control tree rendered server-side.
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let controls = layout::render_html(&layout::dashboard(&state.store));
    Html(PAGE_SHELL.replace("%CONTROLS%", &controls))
}

//! Layout Route
//!
//! - GET /api/v1/layout - The dashboard's control tree as JSON

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout::{self, Component};

/// GET /api/v1/layout
///
/// The declarative component tree the dashboard page is rendered from,
/// for programmatic consumers.
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<Component> {
    Json(layout::dashboard(&state.store))
}

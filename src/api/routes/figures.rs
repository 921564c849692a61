//! Figure Routes
//!
//! - GET /api/v1/figures - Figures for the current session inputs
//! - POST /api/v1/inputs - Apply one input change, respond with the
//!   refreshed figures for both outputs

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{FiguresResponse, InputChangeRequest};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/figures
///
/// Build both chart descriptions from the session's current inputs.
/// Used for the initial render of the page.
pub async fn get_figures(State(state): State<Arc<AppState>>) -> ApiResult<Json<FiguresResponse>> {
    let session = state.session.read().await;
    let updates = session.refresh()?;
    Ok(Json(FiguresResponse::new(session.inputs(), updates)))
}

/// POST /api/v1/inputs
///
/// Record an input change and re-invoke every bound builder with the
/// current five inputs. The write lock serializes changes per session, so
/// overlapping dispatches cannot happen.
pub async fn apply_input(
    State(state): State<Arc<AppState>>,
    Json(request): Json<InputChangeRequest>,
) -> ApiResult<Json<FiguresResponse>> {
    let mut session = state.session.write().await;
    let updates = session.apply(request.into())?;
    Ok(Json(FiguresResponse::new(session.inputs(), updates)))
}

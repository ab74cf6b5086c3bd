use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, warn};

use super::AppState;
use crate::error::AppError;
use crate::matching::{FormInput, UserInputs};
use crate::metrics;
use crate::presentation::{render_all, render_matched, ComparisonView};

/// Handle GET /api/plans
/// Returns every platform and plan without highlighting
pub async fn list_plans(State(state): State<AppState>) -> Json<ComparisonView> {
    let Some(catalog) = state.catalog.catalog() else {
        warn!("Plans requested but the pricing catalog is not loaded");
        return Json(ComparisonView::default());
    };

    Json(render_all(catalog))
}

/// Handle POST /api/match
/// Highlights the first plan per platform that fits the submitted form
pub async fn match_plans(
    State(state): State<AppState>,
    payload: Result<Json<FormInput>, JsonRejection>,
) -> Result<Json<ComparisonView>, AppError> {
    let Json(form) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let Some(catalog) = state.catalog.catalog() else {
        warn!("Match requested but the pricing catalog is not loaded");
        return Ok(Json(ComparisonView::default()));
    };

    let inputs = UserInputs::from_form(&form);
    debug!(
        pdf_count = inputs.pdf_count,
        file_size = %inputs.file_size,
        page_count = %inputs.page_count,
        ad_free = inputs.ad_free,
        "Matching plans"
    );

    let view = render_matched(catalog, &inputs, &state.matcher);

    metrics::record_match_request(state.matcher.policy().as_str());
    for platform in view.platforms.iter().filter(|p| p.highlighted.is_some()) {
        metrics::record_highlight(&platform.key);
    }

    Ok(Json(view))
}

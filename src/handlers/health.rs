use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use super::AppState;
use crate::error::AppError;

/// Handle /health endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handle /ready endpoint
/// Ready only once the pricing catalog is loaded
pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let catalog = state.catalog.catalog().ok_or_else(|| {
        AppError::CatalogUnavailable("Pricing catalog is not loaded".to_string())
    })?;

    Ok(Json(json!({
        "status": "ready",
        "policy": state.matcher.policy(),
        "platforms": catalog.len(),
        "plans": catalog.plan_count(),
    })))
}

//! Read-only analytics endpoint for the admin dashboard.

use axum::extract::State;
use axum::Json;

use crate::models::AnalyticsSnapshot;
use crate::web::response_types::{ApiError, ApiResult};
use crate::web::state::AppState;

/// One-transaction dashboard snapshot: GET /analytics
pub async fn snapshot(State(state): State<AppState>) -> ApiResult<Json<AnalyticsSnapshot>> {
    let snapshot = state
        .analytics
        .snapshot()
        .await
        .map_err(|e| ApiError::from_cms(e, state.config.verbose_errors))?;

    Ok(Json(snapshot))
}

//! Generic batch-reorder handler, shared by every reorderable collection.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::CallerIdentity;
use crate::repository::{OrderedCollection, PositionUpdate};
use crate::web::response_types::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReorderItem {
    pub id: i64,
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub items: Vec<ReorderItem>,
}

#[derive(Debug, Serialize)]
pub struct ReorderResponse {
    pub reordered: bool,
}

/// Atomically apply a batch of positional updates:
/// PUT /{collection}/reorder
pub async fn reorder(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    Extension(caller): Extension<CallerIdentity>,
    Json(request): Json<ReorderRequest>,
) -> ApiResult<Json<ReorderResponse>> {
    let collection: OrderedCollection = collection.parse().map_err(ApiError::Validation)?;

    let items: Vec<PositionUpdate> = request
        .items
        .iter()
        .map(|item| PositionUpdate {
            id: item.id,
            position: item.order,
        })
        .collect();

    info!(
        collection = collection.table(),
        batch_size = items.len(),
        user_id = caller.user_id,
        "reorder requested"
    );

    state
        .ordering
        .reorder(collection, &items)
        .await
        .map_err(|e| ApiError::from_cms(e, state.config.verbose_errors))?;

    Ok(Json(ReorderResponse { reordered: true }))
}

//! Media asset handlers.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use tracing::info;

use crate::models::CallerIdentity;
use crate::services::MediaDeleted;
use crate::web::response_types::{ApiError, ApiResult};
use crate::web::state::AppState;

/// Coupled delete of the metadata row and its backing object:
/// DELETE /media/{id}
pub async fn delete_media(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<Json<MediaDeleted>> {
    info!(asset_id = id, user_id = caller.user_id, "media delete requested");

    let deleted = state
        .media
        .delete(id)
        .await
        .map_err(|e| ApiError::from_cms(e, state.config.verbose_errors))?;

    Ok(Json(deleted))
}

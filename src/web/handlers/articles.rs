//! Article lifecycle handlers: status transitions and duplication.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::models::{Article, CallerIdentity};
use crate::state_machine::{PublishAction, TransitionOutcome};
use crate::web::response_types::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub action: String,
    pub scheduled_at: Option<String>,
}

/// Apply a publish/unpublish/schedule/archive action:
/// PATCH /articles/{id}/publish
pub async fn transition_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(caller): Extension<CallerIdentity>,
    Json(request): Json<PublishRequest>,
) -> ApiResult<Json<TransitionOutcome>> {
    // Parse the payload eagerly so nothing malformed reaches the engine.
    let action: PublishAction = request.action.parse().map_err(ApiError::Validation)?;
    let scheduled_at = parse_scheduled_at(request.scheduled_at.as_deref())?;

    info!(article_id = id, action = %action, user_id = caller.user_id, "status transition requested");

    let outcome = state
        .transitions
        .transition(id, action, scheduled_at)
        .await
        .map_err(|e| ApiError::from_cms(e, state.config.verbose_errors))?;

    Ok(Json(outcome))
}

/// Clone an article with its associations into a new draft:
/// POST /articles/{id}/duplicate
pub async fn duplicate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<(StatusCode, Json<Article>)> {
    let article = state
        .duplication
        .duplicate(id, &caller)
        .await
        .map_err(|e| ApiError::from_cms(e, state.config.verbose_errors))?;

    Ok((StatusCode::CREATED, Json(article)))
}

fn parse_scheduled_at(raw: Option<&str>) -> ApiResult<Option<DateTime<Utc>>> {
    raw.map(|s| {
        DateTime::parse_from_rfc3339(s)
            .map(|at| at.with_timezone(&Utc))
            .map_err(|e| ApiError::validation(format!("Invalid scheduledAt timestamp: {e}")))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scheduled_at() {
        let parsed = parse_scheduled_at(Some("2030-01-01T00:00:00Z")).unwrap().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2030-01-01T00:00:00+00:00");

        assert_eq!(parse_scheduled_at(None).unwrap(), None);
        assert!(parse_scheduled_at(Some("next tuesday")).is_err());
    }
}

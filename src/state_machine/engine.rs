//! Article status transition engine.
//!
//! Validates a publish action and applies it as a single-row write through
//! the article repository. The engine never promotes elapsed schedules on
//! its own; that sweep lives in `services::scheduled_publisher`.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::error::{CmsError, Result};
use crate::repository::{ArticleRepository, ArticleStatusRow, StatusWrite, TimestampWrite};
use crate::state_machine::states::PublishAction;

/// Result of a status transition; serialized as the endpoint payload.
pub type TransitionOutcome = ArticleStatusRow;

pub struct StatusTransitionEngine {
    repository: Arc<dyn ArticleRepository>,
}

impl StatusTransitionEngine {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }

    /// Apply `action` to the identified article.
    ///
    /// Every action is accepted regardless of the article's current status.
    /// `scheduled_at` is required for [`PublishAction::Schedule`] and ignored
    /// otherwise; it is not required to lie in the future, so callers may
    /// schedule retroactively.
    pub async fn transition(
        &self,
        article_id: i64,
        action: PublishAction,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> Result<TransitionOutcome> {
        let write = Self::plan(action, scheduled_at)?;

        let outcome = self
            .repository
            .apply_status(article_id, write)
            .await?
            .ok_or(CmsError::NotFound("Article"))?;

        info!(
            article_id,
            action = %action,
            status = %outcome.status,
            "article status transition applied"
        );

        Ok(outcome)
    }

    /// Translate an action into the exact column writes it performs.
    /// Validation happens here, before anything touches the database.
    fn plan(action: PublishAction, scheduled_at: Option<DateTime<Utc>>) -> Result<StatusWrite> {
        let write = match action {
            PublishAction::Publish => StatusWrite {
                status: action.target_status(),
                published_at: TimestampWrite::Set(Utc::now()),
                scheduled_at: TimestampWrite::Clear,
            },
            PublishAction::Unpublish | PublishAction::Archive => StatusWrite {
                status: action.target_status(),
                published_at: TimestampWrite::Keep,
                scheduled_at: TimestampWrite::Keep,
            },
            PublishAction::Schedule => {
                let at = scheduled_at.ok_or_else(|| {
                    CmsError::validation("scheduledAt is required for the schedule action")
                })?;
                StatusWrite {
                    status: action.target_status(),
                    published_at: TimestampWrite::Keep,
                    scheduled_at: TimestampWrite::Set(at),
                }
            }
        };

        Ok(write)
    }
}

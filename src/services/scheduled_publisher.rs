//! Time-driven promotion of due SCHEDULED articles.
//!
//! The transition engine itself never promotes an elapsed schedule; this
//! sweep is the explicit driver, and it only runs when enabled in
//! configuration. With the sweep disabled, scheduled articles wait for an
//! editor to publish them manually.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::Result;
use crate::repository::ArticleRepository;
use crate::state_machine::{PublishAction, StatusTransitionEngine, TransitionOutcome};

pub struct ScheduledPublisher {
    repository: Arc<dyn ArticleRepository>,
    engine: Arc<StatusTransitionEngine>,
}

impl ScheduledPublisher {
    pub fn new(repository: Arc<dyn ArticleRepository>, engine: Arc<StatusTransitionEngine>) -> Self {
        Self { repository, engine }
    }

    /// Publish every article whose schedule has elapsed at `now`.
    ///
    /// Each promotion is an independent single-row transition; an article
    /// deleted mid-sweep is skipped rather than failing the sweep.
    pub async fn publish_due(&self, now: DateTime<Utc>) -> Result<Vec<TransitionOutcome>> {
        let due = self.repository.due_for_publish(now).await?;
        let mut published = Vec::with_capacity(due.len());

        for article_id in due {
            match self
                .engine
                .transition(article_id, PublishAction::Publish, None)
                .await
            {
                Ok(outcome) => published.push(outcome),
                Err(e) if e.is_client_fault() => {
                    warn!(article_id, error = %e, "skipping due article");
                }
                Err(e) => return Err(e),
            }
        }

        if !published.is_empty() {
            info!(count = published.len(), "promoted due scheduled articles");
        }

        Ok(published)
    }

    /// Periodic sweep loop for the server binary.
    pub async fn run(&self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Err(e) = self.publish_due(Utc::now()).await {
                warn!(error = %e, "scheduled publish sweep failed");
            }
        }
    }
}

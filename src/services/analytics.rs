//! Consistent dashboard snapshot across counts and top-N lists.

use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::models::AnalyticsSnapshot;
use crate::repository::AnalyticsRepository;

/// Produces the dashboard payload from a single repository transaction, so
/// no count can reflect a later write than another count in the same
/// response. Lists are truncated, not paginated.
pub struct AnalyticsAggregator {
    repository: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsAggregator {
    pub fn new(repository: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn snapshot(&self) -> Result<AnalyticsSnapshot> {
        let snapshot = self.repository.snapshot().await?;

        debug!(
            recent_articles = snapshot.recent_articles.len(),
            ai_logs = snapshot.ai_logs.len(),
            "produced analytics snapshot"
        );

        Ok(snapshot)
    }
}

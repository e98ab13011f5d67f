use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Append-only record of an AI-assist invocation, optionally linked to an
/// article. Maps to the `ai_usage_logs` table. Never mutated or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AiUsageLog {
    pub id: i64,
    pub article_id: Option<i64>,
    pub feature: String,
    pub created_at: DateTime<Utc>,
}

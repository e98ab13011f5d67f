use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Second level of the content hierarchy; belongs to exactly one module and
/// owns many article associations. Maps to the `topics` table.
/// `order` positions the topic within its module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub module_id: i64,
    pub order: i32,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

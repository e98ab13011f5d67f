use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Top level of the content hierarchy; owns many topics.
/// Maps to the `modules` table. Ordering among modules is global via
/// `order_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub order_index: i32,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub short_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata record for an externally stored object. Maps to the
/// `media_assets` table.
///
/// The row and the backing object live in separately failing systems joined
/// only by `url`; destruction goes through the coupled-delete protocol in
/// `services::media_lifecycle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: i64,
    pub url: String,
    pub media_type: String,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub created_at: DateTime<Utc>,
}

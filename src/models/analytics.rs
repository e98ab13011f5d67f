use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::state_machine::ArticleStatus;

/// Dashboard counters, all taken at the same logical instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_modules: i64,
    pub total_topics: i64,
    pub published_articles: i64,
    pub draft_articles: i64,
    pub total_media: i64,
    pub ai_usage: i64,
    pub total_menus: i64,
    pub total_sub_menus: i64,
}

/// Recently updated article row for the dashboard, carrying its first
/// associated topic (lowest `order_index`) when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecentArticle {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub status: ArticleStatus,
    pub updated_at: DateTime<Utc>,
    pub view_count: i64,
    pub topic_name: Option<String>,
    pub topic_slug: Option<String>,
    pub topic_color: Option<String>,
}

/// Recent AI usage log entry joined with its article's title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecentAiLog {
    pub id: i64,
    pub article_id: Option<i64>,
    pub feature: String,
    pub created_at: DateTime<Utc>,
    pub article_title: Option<String>,
}

/// Full analytics payload; every count and list reflects one consistent
/// point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub stats: DashboardStats,
    pub recent_articles: Vec<RecentArticle>,
    pub ai_logs: Vec<RecentAiLog>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::state_machine::ArticleStatus;

/// A publishable content unit with a lifecycle status.
/// Maps to the `articles` table.
///
/// An article owns its join rows: `topic_articles` (ordered association to
/// topics) and `article_tags`. Deleting or duplicating an article carries
/// those rows along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub reading_time_minutes: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub author_id: i64,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New article for creation (without generated fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
    pub status: ArticleStatus,
    pub reading_time_minutes: i32,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub author_id: i64,
}

/// Ordered association between an article and a topic.
/// Maps to the `topic_articles` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TopicLink {
    pub article_id: i64,
    pub topic_id: i64,
    pub order_index: i32,
}

/// Association between an article and a tag.
/// Maps to the `article_tags` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TagLink {
    pub article_id: i64,
    pub tag_id: i64,
}

/// An article together with its owned association rows, read as one
/// consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleBundle {
    pub article: Article,
    pub topic_links: Vec<TopicLink>,
    pub tag_links: Vec<TagLink>,
}

/// Topic association to create alongside a new article.
#[derive(Debug, Clone)]
pub struct NewTopicLink {
    pub topic_id: i64,
    pub order_index: i32,
}

/// A new article plus the association rows that must be created with it in
/// the same transaction.
#[derive(Debug, Clone)]
pub struct NewArticleBundle {
    pub article: NewArticle,
    pub topic_links: Vec<NewTopicLink>,
    pub tag_ids: Vec<i64>,
}

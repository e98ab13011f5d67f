//! PostgreSQL-backed repository.
//!
//! Uses the runtime query API with explicit transactions; every multi-row
//! method either commits completely or leaves the database untouched.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::constants::{RECENT_AI_LOG_LIMIT, RECENT_ARTICLE_LIMIT};
use crate::error::{CmsError, Result};
use crate::models::{
    AnalyticsSnapshot, Article, ArticleBundle, DashboardStats, MediaAsset, NewArticleBundle,
    RecentAiLog, RecentArticle, TagLink, TopicLink,
};
use crate::state_machine::ArticleStatus;

use super::{
    AnalyticsRepository, ArticleRepository, ArticleStatusRow, MediaRepository, OrderedCollection,
    OrderingRepository, PositionUpdate, StatusWrite,
};

const ARTICLE_COLUMNS: &str = "id, slug, title, summary, content, status, published_at, \
                               scheduled_at, reading_time_minutes, seo_title, seo_description, \
                               author_id, view_count, created_at, updated_at";

#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ArticleRepository for PgContentRepository {
    async fn apply_status(&self, id: i64, write: StatusWrite) -> Result<Option<ArticleStatusRow>> {
        let (write_published, published_at) = write.published_at.into_params();
        let (write_scheduled, scheduled_at) = write.scheduled_at.into_params();

        let row = sqlx::query_as::<_, ArticleStatusRow>(
            r#"
            UPDATE articles
            SET status = $2,
                published_at = CASE WHEN $3 THEN $4 ELSE published_at END,
                scheduled_at = CASE WHEN $5 THEN $6 ELSE scheduled_at END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, status, published_at, scheduled_at
            "#,
        )
        .bind(id)
        .bind(write.status)
        .bind(write_published)
        .bind(published_at)
        .bind(write_scheduled)
        .bind(scheduled_at)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn fetch_bundle(&self, id: i64) -> Result<Option<ArticleBundle>> {
        // Reads share one transaction so the article and its link rows form
        // a consistent snapshot.
        let mut tx = self.pool.begin().await?;

        let article = sqlx::query_as::<_, Article>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(article) = article else {
            return Ok(None);
        };

        let topic_links = sqlx::query_as::<_, TopicLink>(
            r#"
            SELECT article_id, topic_id, order_index
            FROM topic_articles
            WHERE article_id = $1
            ORDER BY order_index ASC
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        let tag_links = sqlx::query_as::<_, TagLink>(
            "SELECT article_id, tag_id FROM article_tags WHERE article_id = $1",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(ArticleBundle {
            article,
            topic_links,
            tag_links,
        }))
    }

    async fn create_with_associations(&self, bundle: NewArticleBundle) -> Result<Article> {
        let mut tx = self.pool.begin().await?;

        let article = sqlx::query_as::<_, Article>(&format!(
            r#"
            INSERT INTO articles
                (slug, title, summary, content, status, reading_time_minutes,
                 seo_title, seo_description, author_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {ARTICLE_COLUMNS}
            "#
        ))
        .bind(&bundle.article.slug)
        .bind(&bundle.article.title)
        .bind(&bundle.article.summary)
        .bind(&bundle.article.content)
        .bind(bundle.article.status)
        .bind(bundle.article.reading_time_minutes)
        .bind(&bundle.article.seo_title)
        .bind(&bundle.article.seo_description)
        .bind(bundle.article.author_id)
        .fetch_one(&mut *tx)
        .await?;

        for link in &bundle.topic_links {
            sqlx::query(
                "INSERT INTO topic_articles (article_id, topic_id, order_index) VALUES ($1, $2, $3)",
            )
            .bind(article.id)
            .bind(link.topic_id)
            .bind(link.order_index)
            .execute(&mut *tx)
            .await?;
        }

        for tag_id in &bundle.tag_ids {
            sqlx::query("INSERT INTO article_tags (article_id, tag_id) VALUES ($1, $2)")
                .bind(article.id)
                .bind(tag_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        debug!(
            article_id = article.id,
            topic_links = bundle.topic_links.len(),
            tag_links = bundle.tag_ids.len(),
            "created article with associations"
        );

        Ok(article)
    }

    async fn due_for_publish(&self, now: DateTime<Utc>) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id FROM articles
            WHERE status = $1 AND scheduled_at IS NOT NULL AND scheduled_at <= $2
            ORDER BY scheduled_at ASC
            "#,
        )
        .bind(ArticleStatus::Scheduled)
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}

#[async_trait]
impl OrderingRepository for PgContentRepository {
    async fn batch_update_positions(
        &self,
        collection: OrderedCollection,
        items: &[PositionUpdate],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        // Table and column come from a closed enum, never from request input.
        let statement = format!(
            "UPDATE {} SET {} = $1, updated_at = NOW() WHERE id = $2",
            collection.table(),
            collection.position_column()
        );

        for item in items {
            let result = sqlx::query(&statement)
                .bind(item.position)
                .bind(item.id)
                .execute(&mut *tx)
                .await?;

            if result.rows_affected() == 0 {
                // Dropping the transaction rolls back every prior write in
                // the batch.
                return Err(CmsError::NotFound(collection.entity_name()));
            }
        }

        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl MediaRepository for PgContentRepository {
    async fn find_media(&self, id: i64) -> Result<Option<MediaAsset>> {
        let asset = sqlx::query_as::<_, MediaAsset>(
            "SELECT id, url, media_type, alt_text, caption, created_at FROM media_assets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(asset)
    }

    async fn delete_media(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM media_assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl AnalyticsRepository for PgContentRepository {
    async fn snapshot(&self) -> Result<AnalyticsSnapshot> {
        let mut tx = self.pool.begin().await?;

        let total_modules = count(&mut tx, "SELECT COUNT(*) FROM modules").await?;
        let total_topics = count(&mut tx, "SELECT COUNT(*) FROM topics").await?;
        let published_articles =
            count_by_status(&mut tx, ArticleStatus::Published).await?;
        let draft_articles = count_by_status(&mut tx, ArticleStatus::Draft).await?;
        let total_media = count(&mut tx, "SELECT COUNT(*) FROM media_assets").await?;
        let ai_usage = count(&mut tx, "SELECT COUNT(*) FROM ai_usage_logs").await?;
        let total_menus = count(&mut tx, "SELECT COUNT(*) FROM nav_menus").await?;
        let total_sub_menus = count(&mut tx, "SELECT COUNT(*) FROM nav_sub_menus").await?;

        let recent_articles = sqlx::query_as::<_, RecentArticle>(
            r#"
            SELECT a.id, a.title, a.slug, a.status, a.updated_at, a.view_count,
                   t.name AS topic_name, t.slug AS topic_slug, t.color AS topic_color
            FROM articles a
            LEFT JOIN LATERAL (
                SELECT tp.name, tp.slug, tp.color
                FROM topic_articles ta
                JOIN topics tp ON tp.id = ta.topic_id
                WHERE ta.article_id = a.id
                ORDER BY ta.order_index ASC
                LIMIT 1
            ) t ON TRUE
            ORDER BY a.updated_at DESC
            LIMIT $1
            "#,
        )
        .bind(RECENT_ARTICLE_LIMIT)
        .fetch_all(&mut *tx)
        .await?;

        let ai_logs = sqlx::query_as::<_, RecentAiLog>(
            r#"
            SELECT l.id, l.article_id, l.feature, l.created_at,
                   a.title AS article_title
            FROM ai_usage_logs l
            LEFT JOIN articles a ON a.id = l.article_id
            ORDER BY l.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(RECENT_AI_LOG_LIMIT)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(AnalyticsSnapshot {
            stats: DashboardStats {
                total_modules,
                total_topics,
                published_articles,
                draft_articles,
                total_media,
                ai_usage,
                total_menus,
                total_sub_menus,
            },
            recent_articles,
            ai_logs,
        })
    }
}

async fn count(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    statement: &str,
) -> Result<i64> {
    let value = sqlx::query_scalar::<_, i64>(statement)
        .fetch_one(&mut **tx)
        .await?;
    Ok(value)
}

async fn count_by_status(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    status: ArticleStatus,
) -> Result<i64> {
    let value = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles WHERE status = $1")
        .bind(status)
        .fetch_one(&mut **tx)
        .await?;
    Ok(value)
}

//! In-memory repository and media store used by the test suites.
//!
//! Implements the same traits as the PostgreSQL backend with every
//! multi-row method applied under one lock, so the atomicity contracts can
//! be exercised without a live database. Failure injection hooks cover the
//! partial-failure paths of the coupled media delete.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use crate::error::{CmsError, Result};
use crate::models::{
    AiUsageLog, AnalyticsSnapshot, Article, ArticleBundle, DashboardStats, MediaAsset, Module,
    NavMenu, NavSubMenu, NewArticleBundle, RecentAiLog, RecentArticle, TagLink, Topic, TopicLink,
};
use crate::repository::{
    AnalyticsRepository, ArticleRepository, ArticleStatusRow, MediaRepository, OrderedCollection,
    OrderingRepository, PositionUpdate, StatusWrite, TimestampWrite,
};
use crate::state_machine::ArticleStatus;
use crate::storage::MediaStore;
use crate::utils::reading_time;

#[derive(Default)]
struct MemoryState {
    articles: BTreeMap<i64, Article>,
    topic_links: Vec<TopicLink>,
    tag_links: Vec<TagLink>,
    modules: BTreeMap<i64, Module>,
    topics: BTreeMap<i64, Topic>,
    nav_menus: BTreeMap<i64, NavMenu>,
    nav_sub_menus: BTreeMap<i64, NavSubMenu>,
    media: BTreeMap<i64, MediaAsset>,
    ai_logs: BTreeMap<i64, AiUsageLog>,
}

pub struct InMemoryContentRepository {
    state: Mutex<MemoryState>,
    next_id: AtomicI64,
    fail_media_delete: AtomicBool,
}

impl Default for InMemoryContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
            next_id: AtomicI64::new(1),
            fail_media_delete: AtomicBool::new(false),
        }
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Deterministic, strictly increasing timestamps so recency ordering in
    /// tests never depends on clock resolution.
    fn timestamp_for(id: i64) -> DateTime<Utc> {
        Utc::now() - Duration::hours(1) + Duration::seconds(id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().expect("memory repository lock poisoned")
    }

    /// Make the next metadata row delete fail, to exercise the orphan path
    /// of the coupled media delete.
    pub fn inject_media_delete_failure(&self) {
        self.fail_media_delete.store(true, Ordering::SeqCst);
    }

    // Seeding ------------------------------------------------------------

    pub fn seed_article(&self, slug: &str, title: &str, status: ArticleStatus) -> Article {
        let id = self.allocate_id();
        let content = format!("<p>{title}</p>");
        let article = Article {
            id,
            slug: slug.to_string(),
            title: title.to_string(),
            summary: Some(format!("Summary of {title}")),
            reading_time_minutes: reading_time::estimate_minutes(&content),
            content,
            status,
            published_at: None,
            scheduled_at: None,
            seo_title: None,
            seo_description: None,
            author_id: 1,
            view_count: 0,
            created_at: Self::timestamp_for(id),
            updated_at: Self::timestamp_for(id),
        };
        self.lock().articles.insert(id, article.clone());
        article
    }

    pub fn seed_module(&self, slug: &str, title: &str, order_index: i32) -> Module {
        let id = self.allocate_id();
        let module = Module {
            id,
            slug: slug.to_string(),
            title: title.to_string(),
            order_index,
            icon: None,
            color: None,
            short_description: None,
            created_at: Self::timestamp_for(id),
            updated_at: Self::timestamp_for(id),
        };
        self.lock().modules.insert(id, module.clone());
        module
    }

    pub fn seed_topic(&self, module_id: i64, slug: &str, name: &str, order: i32) -> Topic {
        let id = self.allocate_id();
        let topic = Topic {
            id,
            slug: slug.to_string(),
            name: name.to_string(),
            module_id,
            order,
            color: Some("#6C3DFF".to_string()),
            created_at: Self::timestamp_for(id),
            updated_at: Self::timestamp_for(id),
        };
        self.lock().topics.insert(id, topic.clone());
        topic
    }

    pub fn seed_menu(&self, label: &str, order: i32) -> NavMenu {
        let id = self.allocate_id();
        let menu = NavMenu {
            id,
            label: label.to_string(),
            order,
            created_at: Self::timestamp_for(id),
            updated_at: Self::timestamp_for(id),
        };
        self.lock().nav_menus.insert(id, menu.clone());
        menu
    }

    pub fn seed_submenu(&self, menu_id: i64, label: &str, order: i32) -> NavSubMenu {
        let id = self.allocate_id();
        let submenu = NavSubMenu {
            id,
            menu_id,
            label: label.to_string(),
            order,
            created_at: Self::timestamp_for(id),
            updated_at: Self::timestamp_for(id),
        };
        self.lock().nav_sub_menus.insert(id, submenu.clone());
        submenu
    }

    pub fn seed_media(&self, url: &str) -> MediaAsset {
        let id = self.allocate_id();
        let asset = MediaAsset {
            id,
            url: url.to_string(),
            media_type: "IMAGE".to_string(),
            alt_text: None,
            caption: None,
            created_at: Self::timestamp_for(id),
        };
        self.lock().media.insert(id, asset.clone());
        asset
    }

    pub fn seed_ai_log(&self, article_id: Option<i64>, feature: &str) -> AiUsageLog {
        let id = self.allocate_id();
        let log = AiUsageLog {
            id,
            article_id,
            feature: feature.to_string(),
            created_at: Self::timestamp_for(id),
        };
        self.lock().ai_logs.insert(id, log.clone());
        log
    }

    pub fn link_topic(&self, article_id: i64, topic_id: i64, order_index: i32) {
        self.lock().topic_links.push(TopicLink {
            article_id,
            topic_id,
            order_index,
        });
    }

    pub fn link_tag(&self, article_id: i64, tag_id: i64) {
        self.lock().tag_links.push(TagLink { article_id, tag_id });
    }

    // Inspection ---------------------------------------------------------

    pub fn article(&self, id: i64) -> Option<Article> {
        self.lock().articles.get(&id).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.lock().articles.len()
    }

    pub fn association_counts(&self, article_id: i64) -> (usize, usize) {
        let state = self.lock();
        let topics = state
            .topic_links
            .iter()
            .filter(|l| l.article_id == article_id)
            .count();
        let tags = state
            .tag_links
            .iter()
            .filter(|l| l.article_id == article_id)
            .count();
        (topics, tags)
    }

    pub fn position_of(&self, collection: OrderedCollection, id: i64) -> Option<i32> {
        let state = self.lock();
        match collection {
            OrderedCollection::Modules => state.modules.get(&id).map(|m| m.order_index),
            OrderedCollection::NavMenus => state.nav_menus.get(&id).map(|m| m.order),
            OrderedCollection::NavSubMenus => state.nav_sub_menus.get(&id).map(|m| m.order),
        }
    }

    pub fn media_exists(&self, id: i64) -> bool {
        self.lock().media.contains_key(&id)
    }
}

fn apply_timestamp(current: Option<DateTime<Utc>>, write: TimestampWrite) -> Option<DateTime<Utc>> {
    match write {
        TimestampWrite::Keep => current,
        TimestampWrite::Clear => None,
        TimestampWrite::Set(at) => Some(at),
    }
}

#[async_trait]
impl ArticleRepository for InMemoryContentRepository {
    async fn apply_status(&self, id: i64, write: StatusWrite) -> Result<Option<ArticleStatusRow>> {
        let mut state = self.lock();
        let Some(article) = state.articles.get_mut(&id) else {
            return Ok(None);
        };

        article.status = write.status;
        article.published_at = apply_timestamp(article.published_at, write.published_at);
        article.scheduled_at = apply_timestamp(article.scheduled_at, write.scheduled_at);
        article.updated_at = Utc::now();

        Ok(Some(ArticleStatusRow {
            id: article.id,
            status: article.status,
            published_at: article.published_at,
            scheduled_at: article.scheduled_at,
        }))
    }

    async fn fetch_bundle(&self, id: i64) -> Result<Option<ArticleBundle>> {
        let state = self.lock();
        let Some(article) = state.articles.get(&id).cloned() else {
            return Ok(None);
        };

        let mut topic_links: Vec<TopicLink> = state
            .topic_links
            .iter()
            .filter(|l| l.article_id == id)
            .cloned()
            .collect();
        topic_links.sort_by_key(|l| l.order_index);

        let tag_links = state
            .tag_links
            .iter()
            .filter(|l| l.article_id == id)
            .cloned()
            .collect();

        Ok(Some(ArticleBundle {
            article,
            topic_links,
            tag_links,
        }))
    }

    async fn create_with_associations(&self, bundle: NewArticleBundle) -> Result<Article> {
        let id = self.allocate_id();
        let mut state = self.lock();

        // Validate everything before writing anything, mirroring the
        // all-or-nothing transaction of the real backend.
        if state
            .articles
            .values()
            .any(|a| a.slug == bundle.article.slug)
        {
            return Err(CmsError::database(format!(
                "unique constraint violation on articles.slug: {}",
                bundle.article.slug
            )));
        }
        for link in &bundle.topic_links {
            if !state.topics.contains_key(&link.topic_id) {
                return Err(CmsError::database(format!(
                    "foreign key violation: topic {} does not exist",
                    link.topic_id
                )));
            }
        }

        let now = Utc::now();
        let article = Article {
            id,
            slug: bundle.article.slug,
            title: bundle.article.title,
            summary: bundle.article.summary,
            content: bundle.article.content,
            status: bundle.article.status,
            published_at: None,
            scheduled_at: None,
            reading_time_minutes: bundle.article.reading_time_minutes,
            seo_title: bundle.article.seo_title,
            seo_description: bundle.article.seo_description,
            author_id: bundle.article.author_id,
            view_count: 0,
            created_at: now,
            updated_at: now,
        };

        state.articles.insert(id, article.clone());
        for link in bundle.topic_links {
            state.topic_links.push(TopicLink {
                article_id: id,
                topic_id: link.topic_id,
                order_index: link.order_index,
            });
        }
        for tag_id in bundle.tag_ids {
            state.tag_links.push(TagLink {
                article_id: id,
                tag_id,
            });
        }

        Ok(article)
    }

    async fn due_for_publish(&self, now: DateTime<Utc>) -> Result<Vec<i64>> {
        let state = self.lock();
        let mut due: Vec<(DateTime<Utc>, i64)> = state
            .articles
            .values()
            .filter(|a| a.status == ArticleStatus::Scheduled)
            .filter_map(|a| a.scheduled_at.filter(|at| *at <= now).map(|at| (at, a.id)))
            .collect();
        due.sort();
        Ok(due.into_iter().map(|(_, id)| id).collect())
    }
}

#[async_trait]
impl OrderingRepository for InMemoryContentRepository {
    async fn batch_update_positions(
        &self,
        collection: OrderedCollection,
        items: &[PositionUpdate],
    ) -> Result<()> {
        let mut state = self.lock();

        // All ids are checked before any position moves, so a bad batch has
        // no partial effect.
        let exists = |state: &MemoryState, id: i64| match collection {
            OrderedCollection::Modules => state.modules.contains_key(&id),
            OrderedCollection::NavMenus => state.nav_menus.contains_key(&id),
            OrderedCollection::NavSubMenus => state.nav_sub_menus.contains_key(&id),
        };
        if items.iter().any(|item| !exists(&state, item.id)) {
            return Err(CmsError::NotFound(collection.entity_name()));
        }

        let now = Utc::now();
        for item in items {
            match collection {
                OrderedCollection::Modules => {
                    if let Some(module) = state.modules.get_mut(&item.id) {
                        module.order_index = item.position;
                        module.updated_at = now;
                    }
                }
                OrderedCollection::NavMenus => {
                    if let Some(menu) = state.nav_menus.get_mut(&item.id) {
                        menu.order = item.position;
                        menu.updated_at = now;
                    }
                }
                OrderedCollection::NavSubMenus => {
                    if let Some(submenu) = state.nav_sub_menus.get_mut(&item.id) {
                        submenu.order = item.position;
                        submenu.updated_at = now;
                    }
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl MediaRepository for InMemoryContentRepository {
    async fn find_media(&self, id: i64) -> Result<Option<MediaAsset>> {
        Ok(self.lock().media.get(&id).cloned())
    }

    async fn delete_media(&self, id: i64) -> Result<bool> {
        if self.fail_media_delete.swap(false, Ordering::SeqCst) {
            return Err(CmsError::database("injected metadata delete failure"));
        }
        Ok(self.lock().media.remove(&id).is_some())
    }
}

#[async_trait]
impl AnalyticsRepository for InMemoryContentRepository {
    async fn snapshot(&self) -> Result<AnalyticsSnapshot> {
        let state = self.lock();

        let stats = DashboardStats {
            total_modules: state.modules.len() as i64,
            total_topics: state.topics.len() as i64,
            published_articles: state
                .articles
                .values()
                .filter(|a| a.status == ArticleStatus::Published)
                .count() as i64,
            draft_articles: state
                .articles
                .values()
                .filter(|a| a.status == ArticleStatus::Draft)
                .count() as i64,
            total_media: state.media.len() as i64,
            ai_usage: state.ai_logs.len() as i64,
            total_menus: state.nav_menus.len() as i64,
            total_sub_menus: state.nav_sub_menus.len() as i64,
        };

        let mut articles: Vec<&Article> = state.articles.values().collect();
        articles.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        let recent_articles = articles
            .into_iter()
            .take(crate::constants::RECENT_ARTICLE_LIMIT as usize)
            .map(|article| {
                let first_topic = state
                    .topic_links
                    .iter()
                    .filter(|l| l.article_id == article.id)
                    .min_by_key(|l| l.order_index)
                    .and_then(|l| state.topics.get(&l.topic_id));
                RecentArticle {
                    id: article.id,
                    title: article.title.clone(),
                    slug: article.slug.clone(),
                    status: article.status,
                    updated_at: article.updated_at,
                    view_count: article.view_count,
                    topic_name: first_topic.map(|t| t.name.clone()),
                    topic_slug: first_topic.map(|t| t.slug.clone()),
                    topic_color: first_topic.and_then(|t| t.color.clone()),
                }
            })
            .collect();

        let mut logs: Vec<&AiUsageLog> = state.ai_logs.values().collect();
        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let ai_logs = logs
            .into_iter()
            .take(crate::constants::RECENT_AI_LOG_LIMIT as usize)
            .map(|log| RecentAiLog {
                id: log.id,
                article_id: log.article_id,
                feature: log.feature.clone(),
                created_at: log.created_at,
                article_title: log
                    .article_id
                    .and_then(|id| state.articles.get(&id))
                    .map(|a| a.title.clone()),
            })
            .collect();

        Ok(AnalyticsSnapshot {
            stats,
            recent_articles,
            ai_logs,
        })
    }
}

/// Object store fake that records deletions and can be made to fail.
pub struct InMemoryMediaStore {
    deleted: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl Default for InMemoryMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self {
            deleted: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn inject_failure(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn deleted_urls(&self) -> Vec<String> {
        self.deleted.lock().expect("media store lock poisoned").clone()
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn delete(&self, url: &str) -> Result<()> {
        if self.fail.swap(false, Ordering::SeqCst) {
            return Err(CmsError::object_store("injected object store failure"));
        }
        self.deleted
            .lock()
            .expect("media store lock poisoned")
            .push(url.to_string());
        Ok(())
    }
}

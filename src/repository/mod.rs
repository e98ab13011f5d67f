//! Persistence abstraction for the content engine.
//!
//! Each multi-row operation is a single trait method whose implementation is
//! atomic: the PostgreSQL backend wraps it in one transaction, the in-memory
//! backend in `test_helpers` applies it under one lock. Components depend on
//! these traits, never on a concrete client, which keeps the atomicity
//! guarantees testable without a live database.

pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;
use crate::models::{ArticleBundle, MediaAsset, NewArticleBundle, AnalyticsSnapshot, Article};
use crate::state_machine::ArticleStatus;

pub use postgres::PgContentRepository;

/// One positional assignment within a batch reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionUpdate {
    pub id: i64,
    pub position: i32,
}

/// The homogeneous collections that expose batch reordering.
///
/// A closed set so the table and column names below are never taken from
/// request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderedCollection {
    Modules,
    NavMenus,
    NavSubMenus,
}

impl OrderedCollection {
    pub fn table(&self) -> &'static str {
        match self {
            Self::Modules => "modules",
            Self::NavMenus => "nav_menus",
            Self::NavSubMenus => "nav_sub_menus",
        }
    }

    /// Quoted column holding the position (`order` is a SQL keyword).
    pub fn position_column(&self) -> &'static str {
        match self {
            Self::Modules => "order_index",
            Self::NavMenus => "\"order\"",
            Self::NavSubMenus => "\"order\"",
        }
    }

    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::Modules => "Module",
            Self::NavMenus => "Menu",
            Self::NavSubMenus => "Submenu",
        }
    }
}

impl std::str::FromStr for OrderedCollection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "modules" => Ok(Self::Modules),
            "menus" => Ok(Self::NavMenus),
            "submenus" => Ok(Self::NavSubMenus),
            _ => Err(format!("Unknown reorderable collection: {s}")),
        }
    }
}

/// Tri-state write for an optional timestamp column: leave it alone, null it
/// out, or assign a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampWrite {
    Keep,
    Clear,
    Set(DateTime<Utc>),
}

impl TimestampWrite {
    /// (should_write, value) pair for SQL parameter binding.
    pub fn into_params(self) -> (bool, Option<DateTime<Utc>>) {
        match self {
            Self::Keep => (false, None),
            Self::Clear => (true, None),
            Self::Set(at) => (true, Some(at)),
        }
    }
}

/// The full effect of one status transition on an article row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusWrite {
    pub status: ArticleStatus,
    pub published_at: TimestampWrite,
    pub scheduled_at: TimestampWrite,
}

/// Projection of an article's lifecycle columns returned by a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStatusRow {
    pub id: i64,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Apply a status write to one article row. Returns `None` when the
    /// article does not exist; no row is touched in that case.
    async fn apply_status(&self, id: i64, write: StatusWrite) -> Result<Option<ArticleStatusRow>>;

    /// Read an article plus its owned association rows as one consistent
    /// snapshot.
    async fn fetch_bundle(&self, id: i64) -> Result<Option<ArticleBundle>>;

    /// Create an article together with its association rows atomically:
    /// either the article and every link row exist afterwards, or nothing
    /// does.
    async fn create_with_associations(&self, bundle: NewArticleBundle) -> Result<Article>;

    /// Ids of SCHEDULED articles whose `scheduled_at` has elapsed.
    async fn due_for_publish(&self, now: DateTime<Utc>) -> Result<Vec<i64>>;
}

#[async_trait]
pub trait OrderingRepository: Send + Sync {
    /// Apply every positional assignment in one transaction. Any id that
    /// matches no row fails the whole batch with `NotFound` and leaves all
    /// positions unchanged.
    async fn batch_update_positions(
        &self,
        collection: OrderedCollection,
        items: &[PositionUpdate],
    ) -> Result<()>;
}

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn find_media(&self, id: i64) -> Result<Option<MediaAsset>>;

    /// Delete the metadata row. Returns whether a row was removed.
    async fn delete_media(&self, id: i64) -> Result<bool>;
}

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Produce every count and bounded list within a single transaction so
    /// the whole payload reflects one logical instant.
    async fn snapshot(&self) -> Result<AnalyticsSnapshot>;
}

//! Data layer: row types for every persisted entity plus the read models
//! used by the analytics snapshot.
//!
//! Persistence itself lives behind the traits in [`crate::repository`];
//! these types are plain rows.

pub mod ai_usage_log;
pub mod analytics;
pub mod article;
pub mod identity;
pub mod media_asset;
pub mod module;
pub mod nav;
pub mod tag;
pub mod topic;

pub use ai_usage_log::AiUsageLog;
pub use analytics::{AnalyticsSnapshot, DashboardStats, RecentAiLog, RecentArticle};
pub use article::{
    Article, ArticleBundle, NewArticle, NewArticleBundle, NewTopicLink, TagLink, TopicLink,
};
pub use identity::CallerIdentity;
pub use media_asset::MediaAsset;
pub use module::Module;
pub use nav::{NavMenu, NavSubMenu};
pub use tag::Tag;
pub use topic::Topic;

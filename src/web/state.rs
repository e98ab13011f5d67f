//! Shared application state for the web API.

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::CmsConfig;
use crate::error::Result;
use crate::repository::{
    AnalyticsRepository, ArticleRepository, MediaRepository, OrderingRepository,
    PgContentRepository,
};
use crate::services::{
    AnalyticsAggregator, DuplicationService, MediaLifecycleManager, OrderingCoordinator,
    ScheduledPublisher,
};
use crate::state_machine::StatusTransitionEngine;
use crate::storage::{LocalMediaStore, MediaStore};
use crate::web::auth::JwtAuthenticator;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<CmsConfig>,
    pub authenticator: JwtAuthenticator,
    pub transitions: Arc<StatusTransitionEngine>,
    pub duplication: Arc<DuplicationService>,
    pub ordering: Arc<OrderingCoordinator>,
    pub media: Arc<MediaLifecycleManager>,
    pub analytics: Arc<AnalyticsAggregator>,
    pub scheduled_publisher: Arc<ScheduledPublisher>,
}

/// The repository backends behind the engine, as trait objects so tests can
/// swap in the in-memory implementations.
pub struct Backends {
    pub articles: Arc<dyn ArticleRepository>,
    pub ordering: Arc<dyn OrderingRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub analytics: Arc<dyn AnalyticsRepository>,
    pub media_store: Arc<dyn MediaStore>,
}

impl AppState {
    pub fn build(config: CmsConfig, backends: Backends) -> Result<Self> {
        let authenticator = JwtAuthenticator::from_config(&config.auth)
            .map_err(|e| crate::error::CmsError::Configuration(e.to_string()))?;

        let transitions = Arc::new(StatusTransitionEngine::new(backends.articles.clone()));
        let scheduled_publisher = Arc::new(ScheduledPublisher::new(
            backends.articles.clone(),
            transitions.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            authenticator,
            duplication: Arc::new(DuplicationService::new(backends.articles)),
            ordering: Arc::new(OrderingCoordinator::new(backends.ordering)),
            media: Arc::new(MediaLifecycleManager::new(
                backends.media,
                backends.media_store,
            )),
            analytics: Arc::new(AnalyticsAggregator::new(backends.analytics)),
            transitions,
            scheduled_publisher,
        })
    }

    /// Production wiring: PostgreSQL repositories plus the disk-backed
    /// media store rooted at the configured upload directory.
    pub fn for_postgres(config: CmsConfig, pool: PgPool) -> Result<Self> {
        let repository = Arc::new(PgContentRepository::new(pool));
        let media_store = Arc::new(LocalMediaStore::new(config.upload_root.clone()));

        Self::build(
            config,
            Backends {
                articles: repository.clone(),
                ordering: repository.clone(),
                media: repository.clone(),
                analytics: repository,
                media_store,
            },
        )
    }
}

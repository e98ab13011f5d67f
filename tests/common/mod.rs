//! Shared fixtures for the integration suites: in-memory backends wired
//! into the same service graph the server uses.

// Each suite uses a different slice of the fixture.
#![allow(dead_code)]

use std::sync::Arc;

use pressroom_core::config::CmsConfig;
use pressroom_core::services::{
    AnalyticsAggregator, DuplicationService, MediaLifecycleManager, OrderingCoordinator,
    ScheduledPublisher,
};
use pressroom_core::state_machine::StatusTransitionEngine;
use pressroom_core::test_helpers::{InMemoryContentRepository, InMemoryMediaStore};
use pressroom_core::web::state::{AppState, Backends};

pub struct Fixture {
    pub repository: Arc<InMemoryContentRepository>,
    pub media_store: Arc<InMemoryMediaStore>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryContentRepository::new()),
            media_store: Arc::new(InMemoryMediaStore::new()),
        }
    }

    pub fn transition_engine(&self) -> StatusTransitionEngine {
        StatusTransitionEngine::new(self.repository.clone())
    }

    pub fn duplication(&self) -> DuplicationService {
        DuplicationService::new(self.repository.clone())
    }

    pub fn ordering(&self) -> OrderingCoordinator {
        OrderingCoordinator::new(self.repository.clone())
    }

    pub fn media_lifecycle(&self) -> MediaLifecycleManager {
        MediaLifecycleManager::new(self.repository.clone(), self.media_store.clone())
    }

    pub fn analytics(&self) -> AnalyticsAggregator {
        AnalyticsAggregator::new(self.repository.clone())
    }

    pub fn scheduled_publisher(&self) -> ScheduledPublisher {
        ScheduledPublisher::new(
            self.repository.clone(),
            Arc::new(self.transition_engine()),
        )
    }

    /// Full application state over the in-memory backends, for router-level
    /// tests.
    pub fn app_state(&self, config: CmsConfig) -> AppState {
        AppState::build(
            config,
            Backends {
                articles: self.repository.clone(),
                ordering: self.repository.clone(),
                media: self.repository.clone(),
                analytics: self.repository.clone(),
                media_store: self.media_store.clone(),
            },
        )
        .expect("app state should build from test config")
    }
}

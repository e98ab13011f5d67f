//! Multi-row operations of the content engine. Each service is invoked
//! independently per request; none call each other. They share the
//! repository transactional primitive and nothing else.

pub mod analytics;
pub mod duplication;
pub mod media_lifecycle;
pub mod ordering;
pub mod scheduled_publisher;

pub use analytics::AnalyticsAggregator;
pub use duplication::DuplicationService;
pub use media_lifecycle::{MediaDeleted, MediaLifecycleManager};
pub use ordering::OrderingCoordinator;
pub use scheduled_publisher::ScheduledPublisher;

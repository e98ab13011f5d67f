//! Atomic batch reordering of homogeneous collections.

use std::sync::Arc;
use tracing::info;

use crate::error::Result;
use crate::repository::{OrderedCollection, OrderingRepository, PositionUpdate};

/// Applies a list of (id, position) assignments to one collection as a
/// single atomic unit.
///
/// This is a raw batch-assignment primitive: positions are not required to
/// be contiguous, unique or sorted, and no semantics are validated. The only
/// guarantee is all-or-nothing application; concurrent batches are resolved
/// by storage isolation alone (last commit wins).
pub struct OrderingCoordinator {
    repository: Arc<dyn OrderingRepository>,
}

impl OrderingCoordinator {
    pub fn new(repository: Arc<dyn OrderingRepository>) -> Self {
        Self { repository }
    }

    pub async fn reorder(
        &self,
        collection: OrderedCollection,
        items: &[PositionUpdate],
    ) -> Result<()> {
        self.repository
            .batch_update_positions(collection, items)
            .await?;

        info!(
            collection = collection.table(),
            batch_size = items.len(),
            "reordered collection"
        );

        Ok(())
    }
}

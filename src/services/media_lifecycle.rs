//! Coupled deletion of a media row and its backing object.
//!
//! The database and the object store share no transaction, so this is a
//! two-step saga: delete the backing object first, then the metadata row.
//! A failure on the first step aborts with the row preserved; a failure on
//! the second leaves an orphan reference, which is logged for manual
//! reconciliation and surfaced to the caller as an error.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::error::{CmsError, Result};
use crate::repository::MediaRepository;
use crate::storage::MediaStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDeleted {
    pub deleted: bool,
}

pub struct MediaLifecycleManager {
    repository: Arc<dyn MediaRepository>,
    store: Arc<dyn MediaStore>,
}

impl MediaLifecycleManager {
    pub fn new(repository: Arc<dyn MediaRepository>, store: Arc<dyn MediaStore>) -> Self {
        Self { repository, store }
    }

    /// Destroy the asset. No soft delete, no tombstone.
    pub async fn delete(&self, asset_id: i64) -> Result<MediaDeleted> {
        let asset = self
            .repository
            .find_media(asset_id)
            .await?
            .ok_or(CmsError::NotFound("Media"))?;

        // Object store first: if this fails the metadata row is untouched
        // and the asset stays visible and re-deletable.
        self.store.delete(&asset.url).await?;

        match self.repository.delete_media(asset_id).await {
            Ok(true) => {
                info!(asset_id, url = %asset.url, "deleted media asset and backing object");
                Ok(MediaDeleted { deleted: true })
            }
            Ok(false) => {
                // Row vanished between lookup and delete; the object is gone
                // too, so the outcome matches a successful delete.
                Ok(MediaDeleted { deleted: true })
            }
            Err(e) => {
                error!(
                    asset_id,
                    url = %asset.url,
                    error = %e,
                    "orphan media reference: backing object deleted but metadata row survived; needs manual reconciliation"
                );
                Err(e)
            }
        }
    }
}

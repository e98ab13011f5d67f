//! External object storage abstraction.
//!
//! The metadata database and the object store are separately failing
//! systems joined only by the asset `url`; this module covers the one
//! operation the engine needs from the store side of that pair.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::{CmsError, Result};

/// Deletion contract against the external object store.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Remove the object identified by `url`. Deleting an object that is
    /// already gone succeeds, so a previously half-failed delete can be
    /// retried.
    async fn delete(&self, url: &str) -> Result<()>;
}

/// Disk-backed store mapping public URLs (`/uploads/...`) onto a local root
/// directory. Swappable for a remote store behind the same trait.
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a public URL to a path under the root, rejecting anything
    /// that would escape it.
    fn resolve(&self, url: &str) -> Result<PathBuf> {
        let relative = Path::new(url.trim_start_matches('/'));

        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(CmsError::object_store(format!(
                "refusing to resolve unsafe media url: {url}"
            )));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn delete(&self, url: &str) -> Result<()> {
        let path = self.resolve(url)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!(url, "deleted backing object");
                Ok(())
            }
            // Already gone counts as deleted.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CmsError::object_store(format!(
                "failed to delete {url}: {e}"
            ))),
        }
    }
}

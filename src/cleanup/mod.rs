use std::sync::Arc;

use log::debug;

use crate::cache::RecordCache;
use crate::core::{Result, RoleId};
use crate::storage::StorageBackend;

/// Bulk-removes role references when roles are deleted.
///
/// The join delete is a single statement and does not report which records it
/// touched, so the cleaner invalidates the entire record cache afterwards
/// rather than a scoped id set.
pub struct ReferenceCleaner {
    backend: Arc<dyn StorageBackend>,
    cache: Arc<dyn RecordCache>,
}

impl ReferenceCleaner {
    pub fn new(backend: Arc<dyn StorageBackend>, cache: Arc<dyn RecordCache>) -> Self {
        Self { backend, cache }
    }

    /// Deletes every role reference whose role id is in `role_ids`, across
    /// all records, then drops the record cache. Returns the number of rows
    /// removed.
    ///
    /// Idempotent: a second call with the same ids removes nothing. An empty
    /// id set is a no-op and leaves the cache alone.
    pub async fn delete_role_references(&self, role_ids: &[RoleId]) -> Result<u64> {
        if role_ids.is_empty() {
            return Ok(0);
        }

        let removed = self.backend.delete_role_references(role_ids).await?;
        debug!("removed {} role references", removed);
        self.cache.invalidate_all().await;
        Ok(removed)
    }
}

pub mod config;

pub use config::StoreConfig;

use std::sync::Arc;

use log::debug;

use crate::cache::{LruRecordCache, RecordCache};
use crate::core::{ANONYMOUS_ID, Result, StoreError, Timestamp, UserRecord, current_timestamp};
use crate::storage::{IdentityAllocator, MemoryBackend, StorageBackend};

/// Write path for user records.
///
/// Saving an id-less record allocates the next identity and inserts; saving a
/// record with an id overwrites its row. The two timestamp operations are
/// partial writes that also evict the record's cache entry. A full `save`
/// does NOT touch the cache; callers that cache records they re-save must
/// invalidate themselves.
///
/// # Examples
///
/// ```
/// use userstore::{RecordStore, StoreConfig, UserRecord};
///
/// # tokio_test::block_on(async {
/// let store = RecordStore::in_memory(StoreConfig::new());
///
/// let alice = store.save(UserRecord::new("alice")).await.unwrap();
/// assert_eq!(alice.id(), Some(1));
///
/// store.update_last_login(&alice, 1_700_000_000).await.unwrap();
/// # })
/// ```
pub struct RecordStore {
    backend: Arc<dyn StorageBackend>,
    cache: Arc<dyn RecordCache>,
    allocator: IdentityAllocator,
}

impl RecordStore {
    /// Store over an injected backend and cache, with default configuration.
    pub fn new(backend: Arc<dyn StorageBackend>, cache: Arc<dyn RecordCache>) -> Self {
        Self::with_config(backend, cache, StoreConfig::default())
    }

    pub fn with_config(
        backend: Arc<dyn StorageBackend>,
        cache: Arc<dyn RecordCache>,
        config: StoreConfig,
    ) -> Self {
        Self {
            backend,
            cache,
            allocator: IdentityAllocator::new(config.starting_id),
        }
    }

    /// Store backed by the built-in memory engine and a shared LRU cache.
    pub fn in_memory(config: StoreConfig) -> Self {
        let backend = Arc::new(MemoryBackend::new());
        let cache = Arc::new(LruRecordCache::new(config.cache_capacity));
        Self::with_config(backend, cache, config)
    }

    /// Persists the record.
    ///
    /// A record without an id is inserted under a freshly allocated identity;
    /// allocation and insert happen under one backend lock. A record with an
    /// id overwrites its existing row and fails with `NotFound` when no row
    /// matches. The reserved anonymous id is rejected.
    ///
    /// The returned record always carries `Some(id)`.
    pub async fn save(&self, record: UserRecord) -> Result<UserRecord> {
        match record.id() {
            Some(ANONYMOUS_ID) => Err(StoreError::ConstraintViolation(
                "the anonymous record cannot be saved".into(),
            )),
            Some(id) => {
                self.backend.update(&record).await?;
                debug!("updated record {}", id);
                Ok(record)
            }
            None => {
                let saved = self.backend.insert_new(record, &self.allocator).await?;
                if let Some(id) = saved.id() {
                    debug!("inserted record {}", id);
                }
                Ok(saved)
            }
        }
    }

    /// The anonymous record with the reserved id 0.
    ///
    /// Pure construction; the backend is never consulted and never holds a
    /// row for this id.
    pub fn get_anonymous(&self) -> UserRecord {
        UserRecord::anonymous()
    }

    /// Writes the login timestamp column for the record's id, then evicts
    /// that id from the cache.
    ///
    /// A missing row is a silent no-op; the eviction still happens. Records
    /// without an id are skipped entirely.
    pub async fn update_last_login(&self, record: &UserRecord, timestamp: Timestamp) -> Result<()> {
        let Some(id) = record.id() else {
            debug!("skipping last-login update for an unsaved record");
            return Ok(());
        };

        let affected = self.backend.set_last_login(id, timestamp).await?;
        if affected == 0 {
            debug!("last-login update matched no row for id {}", id);
        }
        self.cache.invalidate(&[id]).await;
        Ok(())
    }

    /// Writes the access timestamp column for the record's id, then evicts
    /// that id from the cache. Same no-op semantics as `update_last_login`.
    pub async fn update_last_access(
        &self,
        record: &UserRecord,
        timestamp: Timestamp,
    ) -> Result<()> {
        let Some(id) = record.id() else {
            debug!("skipping last-access update for an unsaved record");
            return Ok(());
        };

        let affected = self.backend.set_last_access(id, timestamp).await?;
        if affected == 0 {
            debug!("last-access update matched no row for id {}", id);
        }
        self.cache.invalidate(&[id]).await;
        Ok(())
    }

    /// Stamps the access column with the current host clock.
    pub async fn touch_last_access(&self, record: &UserRecord) -> Result<()> {
        self.update_last_access(record, current_timestamp()).await
    }

    pub fn backend(&self) -> &Arc<dyn StorageBackend> {
        &self.backend
    }

    pub fn cache(&self) -> &Arc<dyn RecordCache> {
        &self.cache
    }
}

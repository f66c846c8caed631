use std::num::NonZeroUsize;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;

use super::invalidator::RecordCache;
use crate::core::{RecordId, UserRecord};

/// Bounded LRU cache of loaded records, shared across the host process.
///
/// Hosts populate entries with `insert` after loading a record and read them
/// back with `get`; the store side of the seam only ever evicts.
pub struct LruRecordCache {
    entries: Mutex<LruCache<RecordId, UserRecord>>,
}

impl LruRecordCache {
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Creates a cache holding at most `capacity` records. A capacity of
    /// zero is clamped to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Caches a record under its id. Records without an id are ignored.
    pub async fn insert(&self, record: UserRecord) {
        if let Some(id) = record.id() {
            self.entries.lock().await.put(id, record);
        }
    }

    pub async fn get(&self, id: RecordId) -> Option<UserRecord> {
        self.entries.lock().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for LruRecordCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl RecordCache for LruRecordCache {
    async fn invalidate(&self, ids: &[RecordId]) {
        let mut entries = self.entries.lock().await;
        for id in ids {
            entries.pop(id);
        }
    }

    async fn invalidate_all(&self) {
        self.entries.lock().await.clear();
    }
}

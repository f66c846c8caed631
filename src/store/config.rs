use crate::cache::LruRecordCache;
use crate::core::RecordId;
use crate::storage::IdentityAllocator;

/// Record store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Id assigned to the first record inserted into an empty table
    pub starting_id: RecordId,

    /// Capacity of the built-in LRU cache (used by `RecordStore::in_memory`)
    pub cache_capacity: usize,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self {
            starting_id: IdentityAllocator::DEFAULT_STARTING_ID,
            cache_capacity: LruRecordCache::DEFAULT_CAPACITY,
        }
    }

    /// Set the first id handed out on an empty table
    pub fn starting_id(mut self, starting_id: RecordId) -> Self {
        self.starting_id = starting_id;
        self
    }

    /// Set the built-in cache capacity
    pub fn cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

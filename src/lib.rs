// ============================================================================
// UserStore Library
// ============================================================================

pub mod cache;
pub mod cleanup;
pub mod core;
pub mod storage;
pub mod store;

// Re-export main types for convenience
pub use crate::core::{
    ANONYMOUS_ID, LANGCODE_NOT_SPECIFIED, RecordId, Result, RoleId, RoleReference, StoreError,
    Timestamp, UserRecord, current_timestamp,
};

pub use cache::{LruRecordCache, NoopCache, RecordCache};
pub use cleanup::ReferenceCleaner;
pub use storage::{IdentityAllocator, MemoryBackend, StorageBackend};
pub use store::{RecordStore, StoreConfig};

use async_trait::async_trait;

use crate::core::RecordId;

/// Invalidate-only view of a shared record cache, keyed by record id.
///
/// The store and the reference cleaner never originate cache data; they only
/// discard entries made stale by a write. Hosts own the cache lifecycle and
/// inject it, so there is no ambient cache state in this crate.
#[async_trait]
pub trait RecordCache: Send + Sync {
    /// Evict the given ids. An empty slice evicts nothing; it is never
    /// treated as clear-all.
    async fn invalidate(&self, ids: &[RecordId]);

    /// Drop every cached entry.
    async fn invalidate_all(&self);
}

use async_trait::async_trait;

use super::invalidator::RecordCache;
use crate::core::RecordId;

/// Cache collaborator for hosts that do not cache records.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

#[async_trait]
impl RecordCache for NoopCache {
    async fn invalidate(&self, _ids: &[RecordId]) {}

    async fn invalidate_all(&self) {}
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::backend::StorageBackend;
use super::identity::IdentityAllocator;
use crate::core::{
    ANONYMOUS_ID, RecordId, Result, RoleId, RoleReference, StoreError, Timestamp, UserRecord,
};

#[derive(Debug, Default)]
struct Tables {
    records: BTreeMap<RecordId, UserRecord>,
    role_references: Vec<RoleReference>,
}

/// In-memory backend.
///
/// One lock guards both tables. `insert_new` holds the write lock across the
/// max-id read and the insert, so identity allocation cannot race with a
/// concurrent insert.
pub struct MemoryBackend {
    tables: RwLock<Tables>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Number of persisted records.
    pub async fn record_count(&self) -> usize {
        self.tables.read().await.records.len()
    }

    /// Number of join-table rows.
    pub async fn role_reference_count(&self) -> usize {
        self.tables.read().await.role_references.len()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn insert_new(
        &self,
        mut record: UserRecord,
        allocator: &IdentityAllocator,
    ) -> Result<UserRecord> {
        let mut tables = self.tables.write().await;

        let current_max = tables.records.keys().next_back().copied();
        let id = allocator.next_id(current_max);
        if id <= ANONYMOUS_ID {
            return Err(StoreError::ConstraintViolation(format!(
                "id {} is not a valid record identity",
                id
            )));
        }
        if tables.records.contains_key(&id) {
            return Err(StoreError::IdentityCollision(id));
        }

        record.assign_id(id);
        tables.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: &UserRecord) -> Result<()> {
        let id = record.id().ok_or_else(|| {
            StoreError::ConstraintViolation("cannot update a record without an id".into())
        })?;

        let mut tables = self.tables.write().await;
        match tables.records.get_mut(&id) {
            Some(row) => {
                *row = record.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn set_last_login(&self, id: RecordId, timestamp: Timestamp) -> Result<u64> {
        let mut tables = self.tables.write().await;
        match tables.records.get_mut(&id) {
            Some(row) => {
                row.set_last_login(Some(timestamp));
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn set_last_access(&self, id: RecordId, timestamp: Timestamp) -> Result<u64> {
        let mut tables = self.tables.write().await;
        match tables.records.get_mut(&id) {
            Some(row) => {
                row.set_last_access(Some(timestamp));
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn get(&self, id: RecordId) -> Result<Option<UserRecord>> {
        Ok(self.tables.read().await.records.get(&id).cloned())
    }

    async fn max_id(&self) -> Result<Option<RecordId>> {
        Ok(self.tables.read().await.records.keys().next_back().copied())
    }

    async fn add_role_reference(&self, record_id: RecordId, role_id: RoleId) -> Result<()> {
        let mut tables = self.tables.write().await;
        let reference = RoleReference::new(record_id, role_id);
        if !tables.role_references.contains(&reference) {
            tables.role_references.push(reference);
        }
        Ok(())
    }

    async fn role_references(&self) -> Result<Vec<RoleReference>> {
        Ok(self.tables.read().await.role_references.clone())
    }

    async fn delete_role_references(&self, role_ids: &[RoleId]) -> Result<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.role_references.len();
        tables
            .role_references
            .retain(|reference| !role_ids.contains(&reference.role_id));
        Ok((before - tables.role_references.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_new_assigns_increasing_ids() {
        let backend = MemoryBackend::new();
        let allocator = IdentityAllocator::default();

        let a = backend
            .insert_new(UserRecord::new("a"), &allocator)
            .await
            .unwrap();
        let b = backend
            .insert_new(UserRecord::new("b"), &allocator)
            .await
            .unwrap();

        assert_eq!(a.id(), Some(1));
        assert_eq!(b.id(), Some(2));
        assert_eq!(backend.record_count().await, 2);
        assert_eq!(backend.max_id().await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_max_id_of_empty_table_is_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.max_id().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let backend = MemoryBackend::new();
        let record = UserRecord::new("ghost").with_id(9);

        let err = backend.update(&record).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_timestamp_update_on_missing_row_affects_zero() {
        let backend = MemoryBackend::new();

        assert_eq!(backend.set_last_login(7, 1000).await.unwrap(), 0);
        assert_eq!(backend.set_last_access(7, 1000).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_reserved_id_is_never_allocated() {
        let backend = MemoryBackend::new();
        let allocator = IdentityAllocator::new(0);

        let err = backend
            .insert_new(UserRecord::new("a"), &allocator)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ConstraintViolation(_)));
        assert_eq!(backend.record_count().await, 0);
    }

    #[tokio::test]
    async fn test_duplicate_role_reference_is_kept_once() {
        let backend = MemoryBackend::new();

        backend.add_role_reference(1, 5).await.unwrap();
        backend.add_role_reference(1, 5).await.unwrap();

        assert_eq!(backend.role_reference_count().await, 1);
    }
}

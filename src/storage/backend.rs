use async_trait::async_trait;

use super::identity::IdentityAllocator;
use crate::core::{RecordId, Result, RoleId, RoleReference, Timestamp, UserRecord};

/// Backing-store seam - allows pluggable storage backends
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Allocate an id and insert the record as one atomic step.
    ///
    /// Any id already set on `record` is ignored; the assigned id is always
    /// strictly greater than every id previously present in the table.
    async fn insert_new(
        &self,
        record: UserRecord,
        allocator: &IdentityAllocator,
    ) -> Result<UserRecord>;

    /// Overwrite all mutable columns of the row keyed by the record's id.
    ///
    /// Fails with `NotFound` when no row matches.
    async fn update(&self, record: &UserRecord) -> Result<()>;

    /// Conditioned write of the login column. Returns the affected row count;
    /// zero rows is not an error.
    async fn set_last_login(&self, id: RecordId, timestamp: Timestamp) -> Result<u64>;

    /// Conditioned write of the access column. Returns the affected row count;
    /// zero rows is not an error.
    async fn set_last_access(&self, id: RecordId, timestamp: Timestamp) -> Result<u64>;

    /// Point read by id.
    async fn get(&self, id: RecordId) -> Result<Option<UserRecord>>;

    /// Highest id currently present, or `None` for an empty table.
    async fn max_id(&self) -> Result<Option<RecordId>>;

    /// Link a record to a role in the join table.
    async fn add_role_reference(&self, record_id: RecordId, role_id: RoleId) -> Result<()>;

    /// All join-table rows.
    async fn role_references(&self) -> Result<Vec<RoleReference>>;

    /// Bulk-delete every join row whose role id is in `role_ids`.
    /// Returns the number of rows removed.
    async fn delete_role_references(&self, role_ids: &[RoleId]) -> Result<u64>;
}

use blobd_types::ObjectId;

use crate::error::StoreResult;
use crate::object::PersistedObject;

/// Keyed blob store addressed by (repository, oid).
///
/// All implementations must satisfy these invariants:
/// - At most one record exists per (repository, oid) key at any time.
/// - Records are immutable once created; the only mutations are insertion
///   and removal.
/// - `create`'s duplicate check and insert form one atomic step: two
///   concurrent creates for the same key must not both succeed. A remote
///   backend must lean on its conditional-put primitive for this, since a
///   local lock cannot serialize writers across processes.
/// - All backend I/O errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Insert a new record, keyed by its repository and oid.
    ///
    /// Fails with [`StoreError::Duplicate`] if a record already exists at
    /// that key, leaving the store unchanged. On success the record is
    /// returned as stored.
    ///
    /// [`StoreError::Duplicate`]: crate::StoreError::Duplicate
    fn create(&self, object: PersistedObject) -> StoreResult<PersistedObject>;

    /// Fetch the record stored under (repository, oid).
    ///
    /// Returns the exact stored record, or fails with
    /// [`StoreError::NotFound`] if absent.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    fn get(&self, repository: &str, oid: &ObjectId) -> StoreResult<PersistedObject>;

    /// Remove the record stored under (repository, oid).
    ///
    /// Not idempotent: deleting a key that does not exist fails with
    /// [`StoreError::NotFound`], including a repeat delete.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    fn delete(&self, repository: &str, oid: &ObjectId) -> StoreResult<()>;

    /// Remove every record unconditionally.
    ///
    /// Exists for test isolation between independent test cases. Never
    /// routed over the external interface.
    fn clear(&self) -> StoreResult<()>;
}

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

use blobd_types::ObjectId;

use crate::error::{StoreError, StoreResult};
use crate::object::{object_key, PersistedObject};
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// The reference backend: stands in for a remote blob service in tests and
/// local development. Records are held behind a `RwLock` keyed by
/// `"{repository}/{oid}"` and cloned on read.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<String, PersistedObject>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Total blob bytes across all stored records.
    pub fn total_bytes(&self) -> u64 {
        self.objects
            .read()
            .expect("lock poisoned")
            .values()
            .map(|obj| obj.size)
            .sum()
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn create(&self, object: PersistedObject) -> StoreResult<PersistedObject> {
        let mut map = self.objects.write().expect("lock poisoned");
        // Duplicate check and insert happen under one write-lock acquisition:
        // two concurrent creates for the same key cannot both pass the check.
        match map.entry(object.key()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate {
                repository: object.repository,
                oid: object.oid,
            }),
            Entry::Vacant(slot) => Ok(slot.insert(object).clone()),
        }
    }

    fn get(&self, repository: &str, oid: &ObjectId) -> StoreResult<PersistedObject> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(&object_key(repository, oid))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                repository: repository.to_string(),
                oid: *oid,
            })
    }

    fn delete(&self, repository: &str, oid: &ObjectId) -> StoreResult<()> {
        let mut map = self.objects.write().expect("lock poisoned");
        match map.remove(&object_key(repository, oid)) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                repository: repository.to_string(),
                oid: *oid,
            }),
        }
    }

    fn clear(&self) -> StoreResult<()> {
        self.objects.write().expect("lock poisoned").clear();
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectStore")
            .field("record_count", &self.len())
            .field("total_bytes", &self.total_bytes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn make_object(repository: &str, content: &'static [u8]) -> PersistedObject {
        PersistedObject::new(repository, Bytes::from_static(content), "text/plain")
    }

    // -----------------------------------------------------------------------
    // Create / Get
    // -----------------------------------------------------------------------

    #[test]
    fn create_and_get() {
        let store = InMemoryObjectStore::new();
        let obj = make_object("apples", b"hello world!");
        let stored = store.create(obj.clone()).unwrap();
        assert_eq!(stored, obj);

        let fetched = store.get("apples", &obj.oid).unwrap();
        assert_eq!(fetched, obj);
    }

    #[test]
    fn create_returns_the_record_unchanged() {
        let store = InMemoryObjectStore::new();
        let obj = make_object("apples", b"payload");
        let stored = store.create(obj.clone()).unwrap();
        assert_eq!(stored.blob, obj.blob);
        assert_eq!(stored.size, obj.size);
        assert_eq!(stored.content_type, obj.content_type);
        assert_eq!(stored.created_at, obj.created_at);
    }

    #[test]
    fn get_missing_fails_not_found() {
        let store = InMemoryObjectStore::new();
        let oid = ObjectId::from_blob(b"never stored");
        let err = store.get("apples", &oid).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    // -----------------------------------------------------------------------
    // Duplicate detection
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_create_fails_and_leaves_store_unchanged() {
        let store = InMemoryObjectStore::new();
        let first = make_object("apples", b"same bytes");
        store.create(first.clone()).unwrap();

        let second = make_object("apples", b"same bytes");
        let err = store.create(second).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { .. }));

        // First record is still retrievable, unaltered.
        assert_eq!(store.len(), 1);
        let fetched = store.get("apples", &first.oid).unwrap();
        assert_eq!(fetched.blob, first.blob);
        assert_eq!(fetched.created_at, first.created_at);
    }

    #[test]
    fn same_blob_in_different_repositories_is_independent() {
        let store = InMemoryObjectStore::new();
        let apples = make_object("apples", b"shared content");
        let oranges = make_object("oranges", b"shared content");
        assert_eq!(apples.oid, oranges.oid);

        store.create(apples.clone()).unwrap();
        store.create(oranges.clone()).unwrap();
        assert_eq!(store.len(), 2);

        // Deleting one leaves the other retrievable.
        store.delete("apples", &apples.oid).unwrap();
        assert!(store.get("apples", &apples.oid).is_err());
        assert!(store.get("oranges", &oranges.oid).is_ok());
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_then_get_fails_not_found() {
        let store = InMemoryObjectStore::new();
        let obj = make_object("apples", b"to delete");
        store.create(obj.clone()).unwrap();

        store.delete("apples", &obj.oid).unwrap();
        assert!(matches!(
            store.get("apples", &obj.oid),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn delete_is_not_idempotent() {
        let store = InMemoryObjectStore::new();
        let obj = make_object("apples", b"once only");
        store.create(obj.clone()).unwrap();

        store.delete("apples", &obj.oid).unwrap();
        let err = store.delete("apples", &obj.oid).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn delete_missing_fails_not_found() {
        let store = InMemoryObjectStore::new();
        let oid = ObjectId::from_blob(b"never written");
        assert!(matches!(
            store.delete("apples", &oid),
            Err(StoreError::NotFound { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // Clear
    // -----------------------------------------------------------------------

    #[test]
    fn clear_removes_all() {
        let store = InMemoryObjectStore::new();
        store.create(make_object("a", b"one")).unwrap();
        store.create(make_object("b", b"two")).unwrap();
        assert_eq!(store.len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryObjectStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.create(make_object("a", b"x")).unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn total_bytes_sums_blob_sizes() {
        let store = InMemoryObjectStore::new();
        store.create(make_object("a", b"12345")).unwrap();
        store.create(make_object("a", b"123456789")).unwrap();
        assert_eq!(store.total_bytes(), 14);
    }

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryObjectStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryObjectStore::new();
        store.create(make_object("a", b"x")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryObjectStore"));
        assert!(debug.contains("record_count"));
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_creates_on_same_key_admit_one_winner() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let obj = make_object("apples", b"contended");
                    store.create(obj).is_ok()
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().expect("thread should not panic"))
            .filter(|won| *won)
            .count();

        assert_eq!(wins, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());
        let obj = make_object("apples", b"shared data");
        let oid = obj.oid;
        store.create(obj).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let fetched = store.get("apples", &oid).unwrap();
                    assert_eq!(fetched.oid, oid);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }
}

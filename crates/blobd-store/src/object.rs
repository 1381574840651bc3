use bytes::Bytes;
use chrono::{DateTime, Utc};

use blobd_types::ObjectId;

/// Content type recorded when a write declares none.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A persisted repository object: the unit of storage.
///
/// Records are immutable once created. The store never interprets the blob
/// contents; `oid` is derived from them and `size` is cached at construction,
/// so a fully-formed record is the only thing that ever enters the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistedObject {
    /// Repository namespace the object lives under.
    pub repository: String,
    /// SHA-256 of `blob`.
    pub oid: ObjectId,
    /// Raw object content.
    pub blob: Bytes,
    /// Size of `blob` in bytes.
    pub size: u64,
    /// Declared MIME type of the content.
    pub content_type: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl PersistedObject {
    /// Build a record from a repository name, raw content, and declared
    /// content type, deriving the oid and stamping the current time.
    pub fn new(repository: impl Into<String>, blob: Bytes, content_type: impl Into<String>) -> Self {
        let oid = ObjectId::from_blob(&blob);
        let size = blob.len() as u64;
        Self {
            repository: repository.into(),
            oid,
            blob,
            size,
            content_type: content_type.into(),
            created_at: Utc::now(),
        }
    }

    /// The store key for this record.
    pub fn key(&self) -> String {
        object_key(&self.repository, &self.oid)
    }
}

/// Derive the store key for a (repository, oid) pair.
///
/// Shared by every store operation so the uniqueness invariant (one record
/// per pair) is enforced identically everywhere. A durable backend can reuse
/// the same scheme as its storage path.
pub fn object_key(repository: &str, oid: &ObjectId) -> String {
    format!("{repository}/{oid}")
}

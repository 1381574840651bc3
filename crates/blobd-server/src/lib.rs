//! HTTP surface for blobd.
//!
//! Exposes the content-addressable blob store over three data routes:
//!
//! - `PUT /data/:repository` — store a blob, returns `{oid, size}`
//! - `GET /data/:repository/:oid` — fetch the raw blob
//! - `DELETE /data/:repository/:oid` — remove the blob
//!
//! The core store never sees transport concerns: request guards in
//! [`middleware`] enforce the content-type allow-list and the body size cap,
//! handlers orchestrate validation and key derivation, and every failure is
//! rendered by [`ApiError`] as the `{"error": {"status", "message"}}`
//! envelope.

pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod presenter;
pub mod router;
pub mod server;
pub mod state;

pub use config::{ServerConfig, DEFAULT_MAX_BLOB_LENGTH, DEFAULT_PORT};
pub use error::{ApiError, ServerError, ServerResult};
pub use presenter::ApiObjectCreated;
pub use router::build_router;
pub use server::BlobServer;
pub use state::AppState;

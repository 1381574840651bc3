//! Foundation types for blobd.
//!
//! This crate provides the identifier and validation types used throughout
//! the blobd system. Every other blobd crate depends on `blobd-types`.
//!
//! # Key Types
//!
//! - [`ObjectId`] — Content-addressed identifier (SHA-256 hash of a blob)
//! - [`validate_repository_name`] — Repository namespace validation
//! - [`TypeError`] — Parsing failures for identifier types

pub mod error;
pub mod object;
pub mod repository;

pub use error::TypeError;
pub use object::ObjectId;
pub use repository::{
    validate_repository_name, RepositoryNameError, DEFAULT_MAX_REPOSITORY_LENGTH,
};

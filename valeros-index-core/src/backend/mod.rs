//! Search backend implementations.
//!
//! This module defines the `SearchBackend` trait - the four index
//! operations the pipeline needs, plus a liveness check - and provides
//! [`HttpBackend`], an Elasticsearch-compatible REST implementation.

mod http;

pub use http::{HttpBackend, HttpBackendConfig};

use crate::error::Result;
use crate::{DocumentCollection, IndexSchema};
use async_trait::async_trait;

/// Backend for index lifecycle and bulk document writes.
///
/// Implementations own their transport; callers sequence the operations
/// (index creation strictly precedes loading).
#[async_trait]
pub trait SearchBackend: std::fmt::Debug + Send + Sync {
    /// Liveness check. Called once before any index mutation; a failure
    /// aborts the run before anything is touched.
    async fn ping(&self) -> Result<()>;

    /// Check whether an index with this name exists.
    async fn index_exists(&self, index: &str) -> Result<bool>;

    /// Delete an index unconditionally.
    async fn delete_index(&self, index: &str) -> Result<()>;

    /// Create an index with the given schema.
    async fn create_index(&self, index: &str, schema: &IndexSchema) -> Result<()>;

    /// Write every document in one batched operation, using each entry's
    /// subject identifier as the persisted document id (re-loads overwrite
    /// rather than duplicate). Returns the number of documents written.
    async fn bulk_write(&self, index: &str, docs: &DocumentCollection) -> Result<usize>;
}

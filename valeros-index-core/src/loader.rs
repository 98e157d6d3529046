//! Bulk loading of a document collection into an index.

use crate::error::Result;
use crate::{DocumentCollection, SearchBackend};
use tracing::info;

/// Write the whole collection in one batched operation.
///
/// Each document is persisted under its subject identifier, so re-running
/// with identical input overwrites same-identity documents rather than
/// duplicating them. An empty collection performs no network operation.
/// Returns the number of documents written.
pub async fn load<B>(backend: &B, index: &str, docs: &DocumentCollection) -> Result<usize>
where
    B: SearchBackend + ?Sized,
{
    if docs.is_empty() {
        info!(index, "no documents to index");
        return Ok(0);
    }

    info!(index, documents = docs.len(), "indexing documents");
    let written = backend.bulk_write(index, docs).await?;
    info!(index, written, "bulk write complete");

    Ok(written)
}

//! Index lifecycle: drop-and-recreate with an inferred schema.

use crate::error::Result;
use crate::{IndexSchema, SearchBackend};
use tracing::info;

/// Recreate the target index with the given schema.
///
/// Full replace semantics: an existing index is deleted unconditionally
/// before the new one is created - there is no merge or in-place upgrade
/// path. A delete or create failure is fatal for the run.
pub async fn recreate_index<B>(backend: &B, index: &str, schema: &IndexSchema) -> Result<()>
where
    B: SearchBackend + ?Sized,
{
    if backend.index_exists(index).await? {
        info!(index, "deleting existing index");
        backend.delete_index(index).await?;
    }

    info!(index, properties = schema.len(), "creating index");
    backend.create_index(index, schema).await?;
    info!(index, "index created");

    Ok(())
}

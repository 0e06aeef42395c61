use async_trait::async_trait;

use crate::catalog::ProductId;

/// Durable store for the comparison selection, keyed by a single fixed slot.
///
/// Written after every mutation, read once at startup. Malformed or missing
/// persisted content is reported as `Ok(None)` — "no prior selection" — not
/// as an error; an `Err` from `save` must never roll back the in-memory
/// selection.
#[async_trait]
pub trait SelectionStorePort: Send + Sync {
    /// The persisted id list in insertion order, if a readable one exists.
    async fn load(&self) -> anyhow::Result<Option<Vec<ProductId>>>;

    /// Replace the persisted id list.
    async fn save(&self, ids: &[ProductId]) -> anyhow::Result<()>;
}

use async_trait::async_trait;
use std::sync::Mutex;

use bl_core::catalog::ProductId;
use bl_core::ports::SelectionStorePort;

/// Volatile [`SelectionStorePort`] for tests and ephemeral profiles.
#[derive(Default)]
pub struct InMemorySelectionStore {
    slot: Mutex<Option<Vec<ProductId>>>,
}

impl InMemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: Vec<ProductId>) -> Self {
        Self {
            slot: Mutex::new(Some(ids)),
        }
    }
}

#[async_trait]
impl SelectionStorePort for InMemorySelectionStore {
    async fn load(&self) -> anyhow::Result<Option<Vec<ProductId>>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    async fn save(&self, ids: &[ProductId]) -> anyhow::Result<()> {
        *self.slot.lock().unwrap() = Some(ids.to_vec());
        Ok(())
    }
}

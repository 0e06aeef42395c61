//! The comparison selection engine.
//!
//! Owns the bounded selection set for the whole session. Constructed once by
//! the composition root and handed out as an explicit `Arc` — consumers can
//! only exist after the engine does, which replaces the original site's
//! "used outside provider" runtime error with a construction-order guarantee.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use bl_core::catalog::{BenefitSortMode, Product, ProductCatalog, ProductId};
use bl_core::comparison::{ComparisonHighlights, ComparisonSelection, ToggleOutcome};
use bl_core::ports::SelectionStorePort;

#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("unknown product id: {0}")]
    UnknownProduct(ProductId),
}

/// Stateful service around [`ComparisonSelection`].
///
/// All mutations happen synchronously under one lock in response to a
/// discrete user action; there is no concurrent writer. The in-memory
/// selection is authoritative: persistence failures are logged and swallowed,
/// they never roll back a mutation.
pub struct ComparisonEngine {
    catalog: Arc<ProductCatalog>,
    store: Arc<dyn SelectionStorePort>,
    selection: Mutex<ComparisonSelection>,
}

impl ComparisonEngine {
    pub fn new(catalog: Arc<ProductCatalog>, store: Arc<dyn SelectionStorePort>) -> Self {
        Self {
            catalog,
            store,
            selection: Mutex::new(ComparisonSelection::new()),
        }
    }

    /// Read-once-at-startup restore of the persisted selection.
    ///
    /// Stale ids are dropped by the domain restore; store errors degrade to
    /// an empty selection. Never fatal.
    pub async fn restore(&self) {
        let ids = match self.store.load().await {
            Ok(Some(ids)) => ids,
            Ok(None) => {
                debug!("no persisted comparison selection");
                return;
            }
            Err(err) => {
                warn!(error = %err, "failed to read persisted comparison selection, starting empty");
                return;
            }
        };

        let restored = ComparisonSelection::restore(&self.catalog, &ids);
        if restored.len() != ids.len() {
            info!(
                persisted = ids.len(),
                restored = restored.len(),
                "dropped stale ids while restoring comparison selection"
            );
        }
        *self.selection.lock().await = restored;
    }

    /// Toggles a catalog product in or out of the selection.
    ///
    /// On `Added`/`Removed` the id list is persisted immediately;
    /// `RejectedAtCapacity` leaves both memory and store untouched.
    pub async fn toggle(&self, id: &ProductId) -> Result<ToggleOutcome, ComparisonError> {
        let product = self
            .catalog
            .get(id)
            .ok_or_else(|| ComparisonError::UnknownProduct(id.clone()))?;

        let mut selection = self.selection.lock().await;
        let outcome = selection.toggle(product);
        match outcome {
            ToggleOutcome::Added => {
                info!(product = %id, count = selection.len(), "product added to comparison")
            }
            ToggleOutcome::Removed => {
                info!(product = %id, count = selection.len(), "product removed from comparison")
            }
            ToggleOutcome::RejectedAtCapacity => {
                info!(product = %id, "comparison already holds the maximum of 3 products")
            }
        }
        if outcome.changed_selection() {
            self.persist(&selection.ids()).await;
        }
        Ok(outcome)
    }

    /// Empties the selection unconditionally and persists the empty state.
    pub async fn clear(&self) {
        let mut selection = self.selection.lock().await;
        selection.clear();
        info!("comparison selection cleared");
        self.persist(&[]).await;
    }

    /// Snapshot of the current selection in insertion order.
    pub async fn selection(&self) -> Vec<Product> {
        self.selection.lock().await.products().to_vec()
    }

    pub async fn selected_ids(&self) -> Vec<ProductId> {
        self.selection.lock().await.ids()
    }

    /// Products and derived highlights from one locked read, so both halves
    /// of a rendered view describe the same selection state.
    pub async fn view_state(
        &self,
        benefit_sort: BenefitSortMode,
    ) -> (Vec<Product>, ComparisonHighlights) {
        let selection = self.selection.lock().await;
        let highlights = ComparisonHighlights::compute(&selection, benefit_sort);
        (selection.products().to_vec(), highlights)
    }

    async fn persist(&self, ids: &[ProductId]) {
        if let Err(err) = self.store.save(ids).await {
            // The session keeps its in-memory selection; it just may not
            // survive a restart.
            warn!(error = %err, "failed to persist comparison selection");
        }
    }
}

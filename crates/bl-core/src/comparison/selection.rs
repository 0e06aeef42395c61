use crate::catalog::{Product, ProductCatalog, ProductId};

/// Upper bound on how many products can be compared side by side.
pub const MAX_COMPARE_PRODUCTS: usize = 3;

/// Result of a toggle against the selection.
///
/// `RejectedAtCapacity` is an expected, recoverable outcome the UI surfaces
/// as a notice; it is deliberately not modeled as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    RejectedAtCapacity,
}

impl ToggleOutcome {
    /// Whether the toggle changed the selection (and therefore needs to be
    /// persisted).
    pub fn changed_selection(&self) -> bool {
        !matches!(self, ToggleOutcome::RejectedAtCapacity)
    }
}

/// Ordered set of distinct products marked for comparison.
///
/// Insertion order is preserved. Cardinality invariant: `0..=3` after every
/// operation. Re-adding a previously removed product appends it at the end
/// rather than restoring its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSelection {
    products: Vec<Product>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a selection from persisted ids.
    ///
    /// Stale ids (no longer present in the catalog) are silently dropped,
    /// duplicates collapse to their first occurrence, and the result is
    /// clamped to `MAX_COMPARE_PRODUCTS` even though writers never exceed it.
    pub fn restore(catalog: &ProductCatalog, ids: &[ProductId]) -> Self {
        let mut selection = Self::new();
        for id in ids {
            if selection.products.len() == MAX_COMPARE_PRODUCTS {
                break;
            }
            if selection.contains(id) {
                continue;
            }
            if let Some(product) = catalog.get(id) {
                selection.products.push(product.clone());
            }
        }
        selection
    }

    /// Adds the product if absent (subject to capacity), removes it if
    /// present. Removal is always permitted regardless of cardinality.
    pub fn toggle(&mut self, product: &Product) -> ToggleOutcome {
        if let Some(pos) = self.products.iter().position(|p| p.id == product.id) {
            self.products.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.products.len() == MAX_COMPARE_PRODUCTS {
            return ToggleOutcome::RejectedAtCapacity;
        }
        self.products.push(product.clone());
        ToggleOutcome::Added
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Current selection in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Id list in insertion order; this is exactly what gets persisted.
    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| p.id == *id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

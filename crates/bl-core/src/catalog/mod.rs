//! Insurance product catalog domain model.
//!
//! The catalog is a static, read-only collection supplied at startup. The
//! comparison engine only ever references products by id; nothing in this
//! crate creates, mutates, or deletes a product after construction.

mod filter;
pub(crate) mod product;
mod sort;

pub use filter::{filter_products, TypeFilter};
pub use product::{InsuranceType, Product, ProductId};
pub use sort::{sort_benefits, sort_products, BenefitSortMode, ProductSortMode};

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Immutable, ordered catalog of insurance products.
///
/// Only full enumeration and id lookup are offered; that is all the
/// comparison engine needs.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            if by_id.insert(product.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products, by_id })
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&idx| &self.products[idx])
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

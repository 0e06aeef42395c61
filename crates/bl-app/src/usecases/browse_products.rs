//! Product listing use case: type facet + free-text search, then sort.

use std::sync::Arc;

use bl_core::catalog::{
    filter_products, sort_products, Product, ProductCatalog, ProductSortMode, TypeFilter,
};

/// Pure read over the catalog; no side effects, no state.
pub struct BrowseProducts {
    catalog: Arc<ProductCatalog>,
}

impl BrowseProducts {
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self { catalog }
    }

    pub fn execute(
        &self,
        type_filter: TypeFilter,
        search_text: &str,
        sort: ProductSortMode,
    ) -> Vec<Product> {
        let mut listing = filter_products(self.catalog.products(), type_filter, search_text);
        sort_products(&mut listing, sort);
        listing.into_iter().cloned().collect()
    }
}

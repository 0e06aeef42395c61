//! Builds the side-by-side comparison view from the engine's current state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use bl_core::catalog::{BenefitSortMode, Product};
use bl_core::comparison::ComparisonHighlights;

use crate::engine::ComparisonEngine;

/// One row of the benefit matrix: a label from the union plus, per selected
/// product (in selection order), whether that product includes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitRow {
    pub label: String,
    pub included: Vec<bool>,
}

/// Everything the comparison page renders: the selected products in
/// insertion order, the derived highlights, and the benefit matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonView {
    pub products: Vec<Product>,
    pub highlights: ComparisonHighlights,
    pub benefit_rows: Vec<BenefitRow>,
}

pub struct GetComparisonView {
    engine: Arc<ComparisonEngine>,
}

impl GetComparisonView {
    pub fn new(engine: Arc<ComparisonEngine>) -> Self {
        Self { engine }
    }

    pub async fn execute(&self, benefit_sort: BenefitSortMode) -> ComparisonView {
        let (products, highlights) = self.engine.view_state(benefit_sort).await;

        let benefit_rows = highlights
            .benefit_union
            .iter()
            .map(|label| BenefitRow {
                label: label.clone(),
                included: products
                    .iter()
                    .map(|p| p.benefits.iter().any(|b| b == label))
                    .collect(),
            })
            .collect();

        ComparisonView {
            products,
            highlights,
            benefit_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bl_core::catalog::{InsuranceType, ProductCatalog, ProductId};
    use bl_core::ports::SelectionStorePort;

    struct NullStore;

    #[async_trait]
    impl SelectionStorePort for NullStore {
        async fn load(&self) -> anyhow::Result<Option<Vec<ProductId>>> {
            Ok(None)
        }

        async fn save(&self, _ids: &[ProductId]) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn product(id: &str, price: f64, rating: f64, benefits: &[&str]) -> Product {
        Product {
            id: ProductId::from(id),
            name: format!("plan-{id}"),
            provider: "provider".to_string(),
            insurance_type: InsuranceType::Health,
            base_price: price,
            rating,
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
            description: String::new(),
            logo_url: String::new(),
        }
    }

    async fn engine_with(products: Vec<Product>) -> Arc<ComparisonEngine> {
        let ids: Vec<ProductId> = products.iter().map(|p| p.id.clone()).collect();
        let catalog = Arc::new(ProductCatalog::new(products).unwrap());
        let engine = Arc::new(ComparisonEngine::new(catalog, Arc::new(NullStore)));
        for id in &ids {
            engine.toggle(id).await.unwrap();
        }
        engine
    }

    #[tokio::test]
    async fn benefit_matrix_marks_inclusion_per_selected_product() {
        let engine = engine_with(vec![
            product("1", 100.0, 4.5, &["Windscreen cover", "Excess protector"]),
            product("2", 90.0, 4.9, &["Excess protector"]),
        ])
        .await;

        let view = GetComparisonView::new(engine)
            .execute(BenefitSortMode::OriginalOrder)
            .await;

        assert_eq!(view.products.len(), 2);
        assert_eq!(view.benefit_rows.len(), 2);
        assert_eq!(view.benefit_rows[0].label, "Windscreen cover");
        assert_eq!(view.benefit_rows[0].included, vec![true, false]);
        assert_eq!(view.benefit_rows[1].included, vec![true, true]);
        assert_eq!(view.highlights.cheapest, vec![ProductId::from("2")]);
    }

    #[tokio::test]
    async fn empty_selection_renders_an_empty_view() {
        let engine = engine_with(vec![]).await;

        let view = GetComparisonView::new(engine)
            .execute(BenefitSortMode::OriginalOrder)
            .await;

        assert!(view.products.is_empty());
        assert!(view.benefit_rows.is_empty());
    }
}

use serde::{Deserialize, Serialize};

use crate::catalog::{sort_benefits, BenefitSortMode, ProductId};

use super::selection::ComparisonSelection;

/// Derived comparison view: which selected products are cheapest / top rated,
/// plus the deduplicated union of their benefit labels.
///
/// Recomputed on every read, never stored. Highlighting only activates once
/// at least two products are selected; a lone product is not tagged as
/// cheapest or top rated (some page variants of the original site disagreed
/// on this threshold, this is the canonical policy). Ties produce multiple
/// simultaneously highlighted products, never an arbitrary single winner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonHighlights {
    pub cheapest: Vec<ProductId>,
    pub top_rated: Vec<ProductId>,
    pub benefit_union: Vec<String>,
}

impl ComparisonHighlights {
    pub fn compute(selection: &ComparisonSelection, benefit_sort: BenefitSortMode) -> Self {
        let products = selection.products();

        let mut benefit_union: Vec<String> = Vec::new();
        for product in products {
            for benefit in &product.benefits {
                if !benefit_union.iter().any(|b| b == benefit) {
                    benefit_union.push(benefit.clone());
                }
            }
        }
        sort_benefits(&mut benefit_union, benefit_sort);

        if products.len() < 2 {
            return Self {
                cheapest: Vec::new(),
                top_rated: Vec::new(),
                benefit_union,
            };
        }

        let min_price = products
            .iter()
            .map(|p| p.base_price)
            .fold(f64::INFINITY, f64::min);
        let max_rating = products
            .iter()
            .map(|p| p.rating)
            .fold(f64::NEG_INFINITY, f64::max);

        let cheapest = products
            .iter()
            .filter(|p| p.base_price == min_price)
            .map(|p| p.id.clone())
            .collect();
        let top_rated = products
            .iter()
            .filter(|p| p.rating == max_rating)
            .map(|p| p.id.clone())
            .collect();

        Self {
            cheapest,
            top_rated,
            benefit_union,
        }
    }

    pub fn is_cheapest(&self, id: &ProductId) -> bool {
        self.cheapest.contains(id)
    }

    pub fn is_top_rated(&self, id: &ProductId) -> bool {
        self.top_rated.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::{test_product, Product};

    fn product(id: &str, price: f64, rating: f64, benefits: &[&str]) -> Product {
        let mut p = test_product(id, "plan", "provider");
        p.base_price = price;
        p.rating = rating;
        p.benefits = benefits.iter().map(|b| b.to_string()).collect();
        p
    }

    fn selection_of(products: &[Product]) -> ComparisonSelection {
        let mut selection = ComparisonSelection::new();
        for p in products {
            selection.toggle(p);
        }
        selection
    }

    #[test]
    fn price_and_rating_ties_highlight_every_member() {
        let selection = selection_of(&[
            product("1", 100.0, 4.5, &[]),
            product("2", 100.0, 4.9, &[]),
            product("3", 150.0, 4.9, &[]),
        ]);

        let view = ComparisonHighlights::compute(&selection, BenefitSortMode::OriginalOrder);

        assert_eq!(view.cheapest, vec![ProductId::from("1"), ProductId::from("2")]);
        assert_eq!(view.top_rated, vec![ProductId::from("2"), ProductId::from("3")]);
        assert!(view.is_cheapest(&ProductId::from("2")));
        assert!(!view.is_top_rated(&ProductId::from("1")));
    }

    #[test]
    fn no_highlights_below_two_selected_products() {
        let selection = selection_of(&[product("1", 100.0, 4.5, &["Maternity cover"])]);

        let view = ComparisonHighlights::compute(&selection, BenefitSortMode::OriginalOrder);

        assert!(view.cheapest.is_empty());
        assert!(view.top_rated.is_empty());
        // The benefit union is still produced for the single card.
        assert_eq!(view.benefit_union, vec!["Maternity cover"]);
    }

    #[test]
    fn benefit_union_deduplicates_in_first_seen_order() {
        let selection = selection_of(&[
            product("1", 100.0, 4.5, &["Windscreen cover", "Excess protector"]),
            product("2", 90.0, 4.0, &["Excess protector", "Courtesy car"]),
        ]);

        let view = ComparisonHighlights::compute(&selection, BenefitSortMode::OriginalOrder);

        assert_eq!(
            view.benefit_union,
            vec!["Windscreen cover", "Excess protector", "Courtesy car"]
        );
    }

    #[test]
    fn benefit_union_supports_alphabetical_mode() {
        let selection = selection_of(&[
            product("1", 100.0, 4.5, &["Windscreen cover"]),
            product("2", 90.0, 4.0, &["Excess protector"]),
        ]);

        let view = ComparisonHighlights::compute(&selection, BenefitSortMode::Alphabetical);

        assert_eq!(view.benefit_union, vec!["Excess protector", "Windscreen cover"]);
    }

    #[test]
    fn empty_selection_yields_empty_view() {
        let view = ComparisonHighlights::compute(
            &ComparisonSelection::new(),
            BenefitSortMode::OriginalOrder,
        );

        assert_eq!(view, ComparisonHighlights::default());
    }
}

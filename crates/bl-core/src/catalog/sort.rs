use super::product::Product;

/// Sort order for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSortMode {
    /// Preserve the input order.
    #[default]
    Default,
    ProviderNameAscending,
    PriceAscending,
}

/// Sort order for the benefit-union column of the comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BenefitSortMode {
    /// First-seen order across the union construction.
    #[default]
    OriginalOrder,
    Alphabetical,
}

/// Stable sort of a product listing. Equal keys keep their relative input
/// order; `Default` is the identity.
pub fn sort_products(products: &mut Vec<&Product>, mode: ProductSortMode) {
    match mode {
        ProductSortMode::Default => {}
        ProductSortMode::ProviderNameAscending => {
            products.sort_by(|a, b| a.provider.cmp(&b.provider));
        }
        ProductSortMode::PriceAscending => {
            products.sort_by(|a, b| a.base_price.total_cmp(&b.base_price));
        }
    }
}

/// Sorts a benefit-label sequence. `OriginalOrder` is the identity; the
/// labels already carry first-seen union order.
pub fn sort_benefits(benefits: &mut [String], mode: BenefitSortMode) {
    match mode {
        BenefitSortMode::OriginalOrder => {}
        BenefitSortMode::Alphabetical => benefits.sort_by(|a, b| a.cmp(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::{test_product, ProductId};

    fn priced(id: &str, provider: &str, price: f64) -> Product {
        let mut p = test_product(id, "plan", provider);
        p.base_price = price;
        p
    }

    fn ids(products: &[&Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn price_sort_is_stable_for_equal_premiums() {
        let a = priced("1", "A", 10.0);
        let b = priced("2", "B", 10.0);
        let c = priced("3", "C", 5.0);
        let mut listing: Vec<&Product> = vec![&a, &b, &c];

        sort_products(&mut listing, ProductSortMode::PriceAscending);

        assert_eq!(
            ids(&listing),
            vec![
                ProductId::from("3"),
                ProductId::from("1"),
                ProductId::from("2")
            ]
        );
    }

    #[test]
    fn default_mode_preserves_input_order() {
        let a = priced("1", "Zeta", 30.0);
        let b = priced("2", "Alpha", 10.0);
        let mut listing: Vec<&Product> = vec![&a, &b];

        sort_products(&mut listing, ProductSortMode::Default);

        assert_eq!(ids(&listing), vec![ProductId::from("1"), ProductId::from("2")]);
    }

    #[test]
    fn provider_sort_orders_lexicographically() {
        let a = priced("1", "Jubilee Insurance", 10.0);
        let b = priced("2", "APA Insurance", 20.0);
        let c = priced("3", "Britam", 30.0);
        let mut listing: Vec<&Product> = vec![&a, &b, &c];

        sort_products(&mut listing, ProductSortMode::ProviderNameAscending);

        assert_eq!(
            ids(&listing),
            vec![
                ProductId::from("2"),
                ProductId::from("3"),
                ProductId::from("1")
            ]
        );
    }

    #[test]
    fn alphabetical_benefit_sort() {
        let mut benefits = vec![
            "Windscreen cover".to_string(),
            "Excess protector".to_string(),
            "24/7 Roadside assistance".to_string(),
        ];

        sort_benefits(&mut benefits, BenefitSortMode::Alphabetical);

        assert_eq!(
            benefits,
            vec![
                "24/7 Roadside assistance",
                "Excess protector",
                "Windscreen cover"
            ]
        );
    }
}

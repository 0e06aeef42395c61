use super::product::{InsuranceType, Product};

/// Type facet for the product listing. `All` disables the facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Only(InsuranceType),
}

impl TypeFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => product.insurance_type == *t,
        }
    }
}

/// Filters the listing by type facet AND free-text search.
///
/// The search text matches case-insensitively as a substring of either the
/// product name or the provider name; empty search text matches everything.
/// Both predicates must hold.
pub fn filter_products<'a>(
    products: &'a [Product],
    type_filter: TypeFilter,
    search_text: &str,
) -> Vec<&'a Product> {
    let needle = search_text.to_lowercase();
    products
        .iter()
        .filter(|p| type_filter.matches(p))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.provider.to_lowercase().contains(&needle)
        })
        .collect()
}

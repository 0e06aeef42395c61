use std::fmt;

use serde::{Deserialize, Serialize};

/// Product primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Closed set of insurance lines sold on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceType {
    Motor,
    Health,
    Life,
    Travel,
    Business,
}

impl InsuranceType {
    pub const ALL: [InsuranceType; 5] = [
        InsuranceType::Motor,
        InsuranceType::Health,
        InsuranceType::Life,
        InsuranceType::Travel,
        InsuranceType::Business,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InsuranceType::Motor => "Motor",
            InsuranceType::Health => "Health",
            InsuranceType::Life => "Life",
            InsuranceType::Travel => "Travel",
            InsuranceType::Business => "Business",
        }
    }
}

impl fmt::Display for InsuranceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An insurance product as listed on the marketplace.
///
/// Records are immutable once loaded into the catalog. `base_price` is the
/// annual premium in KES; `rating` is the aggregated trust score in
/// `[0.0, 5.0]`. `benefits` keeps the provider's ordering and is distinct
/// within a single product (the same label may appear across products).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub provider: String,
    pub insurance_type: InsuranceType,
    pub base_price: f64,
    pub rating: f64,
    pub benefits: Vec<String>,
    pub description: String,
    pub logo_url: String,
}

#[cfg(test)]
pub(crate) fn test_product(id: &str, name: &str, provider: &str) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        provider: provider.to_string(),
        insurance_type: InsuranceType::Motor,
        base_price: 10_000.0,
        rating: 4.0,
        benefits: vec![],
        description: String::new(),
        logo_url: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insurance_type_labels_match_marketplace_names() {
        let labels: Vec<&str> = InsuranceType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["Motor", "Health", "Life", "Travel", "Business"]);
    }

    #[test]
    fn product_id_serializes_as_plain_string() {
        let id = ProductId::from("p-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-1\"");
    }
}

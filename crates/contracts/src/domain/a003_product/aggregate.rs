use crate::domain::a002_category::aggregate::CategoryId;
use crate::domain::common::aggregate_id::parse_numeric_id;
use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        parse_numeric_id(s).map(ProductId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,

    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category_id: u32) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category_id: CategoryId::new(category_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_category_id() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Milk", "categoryId": 1}"#).unwrap();
        assert_eq!(product, Product::new(1, "Milk", 1));
    }

    #[test]
    fn test_product_serialize_keeps_camel_case() {
        let json = serde_json::to_value(Product::new(7, "Coca-Cola", 2)).unwrap();
        assert_eq!(json["categoryId"], 2);
        assert_eq!(json["id"], 7);
    }
}

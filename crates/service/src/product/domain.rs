use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Create request as received from callers. `price` may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: String,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Validated product ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

impl From<models::product::Model> for Product {
    fn from(m: models::product::Model) -> Self {
        Self { id: m.id, name: m.name, price: m.price }
    }
}

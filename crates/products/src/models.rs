//! Product catalog data records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry held by [`crate::services::ProductService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub in_stock: bool,
}

/// Request body for creating or replacing a product.
///
/// Any `id` sent by the client is ignored; the service assigns identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub in_stock: bool,
}

impl Product {
    pub fn from_input(id: i32, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            in_stock: input.in_stock,
        }
    }

    /// Overwrite every mutable field with the values from `input`.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.in_stock = input.in_stock;
    }
}

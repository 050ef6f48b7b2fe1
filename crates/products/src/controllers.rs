//! Entry layer for the product catalog.
//!
//! Each method delegates to exactly one [`ProductService`] call and maps the outcome onto an
//! HTTP response. Routing lives in [`crate::routes`].

use crate::models::{Product, ProductInput};
use crate::services::ProductService;
use api_shared::ApiError;
use axum::{
    http::{header, HeaderName, StatusCode},
    response::Json,
};

/// Response of a successful create: status, `Location` header and the stored product.
pub type Created = (StatusCode, [(HeaderName, String); 1], Json<Product>);

#[derive(Debug, Default)]
pub struct ProductsController {
    service: ProductService,
}

impl ProductsController {
    pub fn new(service: ProductService) -> Self {
        Self { service }
    }

    pub fn get_all(&self) -> Json<Vec<Product>> {
        Json(self.service.get_all())
    }

    pub fn get_by_id(&self, id: i32) -> Result<Json<Product>, ApiError> {
        self.service
            .get_by_id(id)
            .map(Json)
            .ok_or_else(|| ApiError::NotFound(format!("product {id}")))
    }

    pub fn add(&self, input: ProductInput) -> Created {
        let product = self.service.add(input);
        let location = format!("/products/{}", product.id);
        (
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(product),
        )
    }

    pub fn update(&self, id: i32, input: ProductInput) -> Result<StatusCode, ApiError> {
        self.service
            .update(id, input)
            .then_some(StatusCode::NO_CONTENT)
            .ok_or_else(|| ApiError::NotFound(format!("product {id}")))
    }
}

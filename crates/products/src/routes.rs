//! HTTP routing for the product catalog API.

use crate::controllers::{Created, ProductsController};
use crate::models::{Product, ProductInput};
use api_shared::{ApiError, ErrorBody, HealthRes, HealthService};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health, get_all, get_by_id, add, update),
    components(schemas(Product, ProductInput, HealthRes, ErrorBody))
)]
pub struct ApiDoc;

/// Builds the product API router around a shared controller.
pub fn router(controller: Arc<ProductsController>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi))
        .route("/products", get(get_all).post(add))
        .route("/products/:id", get(get_by_id).put(update))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(controller)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
async fn health() -> Json<HealthRes> {
    Json(HealthService::new("Product API").check_health())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Every product in the catalog", body = [Product])
    )
)]
#[axum::debug_handler]
async fn get_all(State(controller): State<Arc<ProductsController>>) -> Json<Vec<Product>> {
    controller.get_all()
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this id", body = ErrorBody)
    )
)]
#[axum::debug_handler]
async fn get_by_id(
    State(controller): State<Arc<ProductsController>>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    tracing::debug!(id, "get product");
    controller.get_by_id(id)
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product)
    )
)]
#[axum::debug_handler]
async fn add(
    State(controller): State<Arc<ProductsController>>,
    Json(input): Json<ProductInput>,
) -> Created {
    controller.add(input)
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product identifier")),
    request_body = ProductInput,
    responses(
        (status = 204, description = "Product updated"),
        (status = 404, description = "No product with this id", body = ErrorBody)
    )
)]
#[axum::debug_handler]
async fn update(
    State(controller): State<Arc<ProductsController>>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<StatusCode, ApiError> {
    controller.update(id, input)
}

//! HTTP routing for the patient API.

use crate::api::controllers::PatientsController;
use crate::application::patients::create_patient::CreatePatientCommand;
use crate::domain::Patient;
use api_shared::{ApiError, ErrorBody, HealthRes, HealthService};
use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health, create_patient),
    components(schemas(CreatePatientCommand, Patient, HealthRes, ErrorBody))
)]
pub struct ApiDoc;

/// Builds the patient API router around a shared controller.
///
/// The create route is mounted under both `/api/Patients` and `/api/patients` so clients written
/// against case-insensitive hosts keep working.
pub fn router(controller: Arc<PatientsController>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi))
        .route("/api/Patients", post(create_patient))
        .route("/api/patients", post(create_patient))
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
    Json(HealthService::new("Patient API").check_health())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    post,
    path = "/api/Patients",
    request_body = CreatePatientCommand,
    responses(
        (status = 200, description = "Patient registered", body = Patient),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
#[axum::debug_handler]
async fn create_patient(
    State(controller): State<Arc<PatientsController>>,
    Json(command): Json<CreatePatientCommand>,
) -> Result<Json<Patient>, ApiError> {
    controller.create(command).await
}

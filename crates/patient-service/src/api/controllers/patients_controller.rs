use crate::application::patients::create_patient::{CreatePatientCommand, CreatePatientHandler};
use crate::domain::Patient;
use api_shared::ApiError;
use axum::response::Json;

/// Entry point for patient registration requests.
#[derive(Clone)]
pub struct PatientsController {
    create_patient_handler: CreatePatientHandler,
}

impl PatientsController {
    pub fn new(create_patient_handler: CreatePatientHandler) -> Self {
        Self {
            create_patient_handler,
        }
    }

    pub async fn create(&self, command: CreatePatientCommand) -> Result<Json<Patient>, ApiError> {
        let patient = self.create_patient_handler.handle(command).await?;
        tracing::info!(id = %patient.id, "patient registered");
        Ok(Json(patient))
    }
}

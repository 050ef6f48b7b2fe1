//! HTTP entry layer for the patient service.

pub mod controllers;
pub mod routes;

use crate::error::PatientError;
use api_shared::ApiError;

impl From<PatientError> for ApiError {
    fn from(err: PatientError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

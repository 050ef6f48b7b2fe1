use super::PatientRepository;
use crate::domain::{NewPatient, Patient};
use crate::error::PatientResult;
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

/// Patient storage backed by an in-process list.
#[derive(Debug, Default)]
pub struct InMemoryPatientRepository {
    patients: RwLock<Vec<Patient>>,
}

impl InMemoryPatientRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PatientRepository for InMemoryPatientRepository {
    async fn add(&self, patient: NewPatient) -> PatientResult<Patient> {
        let patient = Patient::register(patient, Uuid::new_v4(), Utc::now());
        let mut patients = self.patients.write();
        patients.push(patient.clone());
        tracing::debug!(count = patients.len(), "patient stored");
        Ok(patient)
    }

    async fn list(&self) -> PatientResult<Vec<Patient>> {
        Ok(self.patients.read().clone())
    }
}

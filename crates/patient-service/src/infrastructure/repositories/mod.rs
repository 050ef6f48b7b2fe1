//! Patient repositories.
//!
//! [`PatientRepository`] is the seam the application layer depends on. The only adapter is
//! [`InMemoryPatientRepository`], which keeps records for the lifetime of the process.

mod in_memory_patient_repository;

pub use in_memory_patient_repository::InMemoryPatientRepository;

use crate::domain::{NewPatient, Patient};
use crate::error::PatientResult;
use async_trait::async_trait;

#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Store a patient, assigning its identifier and creation timestamp.
    async fn add(&self, patient: NewPatient) -> PatientResult<Patient>;

    /// Every stored patient in insertion order.
    async fn list(&self) -> PatientResult<Vec<Patient>>;
}

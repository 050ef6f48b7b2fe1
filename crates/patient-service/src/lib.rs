//! # Patient Service
//!
//! A layered patient registration API.
//!
//! Layers, outermost first:
//! - `api`: controllers and routing (axum)
//! - `application`: one handler per command
//! - `infrastructure`: repository trait and the in-memory adapter
//! - `domain`: plain records with no outward dependencies
//!
//! The dependency direction is checked by the `architecture-lint` crate; see
//! `tests/architecture_rules.rs`.

#![warn(rust_2018_idioms)]

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{PatientError, PatientResult};

use api::controllers::PatientsController;
use application::patients::create_patient::CreatePatientHandler;
use infrastructure::repositories::PatientRepository;
use std::sync::Arc;

/// Wire controller, handler and repository together.
pub fn compose(repository: Arc<dyn PatientRepository>) -> Arc<PatientsController> {
    Arc::new(PatientsController::new(CreatePatientHandler::new(
        repository,
    )))
}

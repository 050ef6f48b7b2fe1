//! Register a new patient.

mod command;
mod handler;

pub use command::{parse_date_of_birth, CreatePatientCommand};
pub use handler::CreatePatientHandler;

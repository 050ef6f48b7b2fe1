//! Patient domain records.
//!
//! Nothing in here knows about HTTP, handlers or storage adapters.

mod patient;

pub use patient::{NewPatient, Patient};

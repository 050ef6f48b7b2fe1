//! Storage adapters for the patient service.

pub mod repositories;

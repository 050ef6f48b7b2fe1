//! Use cases of the patient service, one handler per command.

pub mod patients;

pub mod create_patient;

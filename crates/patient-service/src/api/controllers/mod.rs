mod patients_controller;

pub use patients_controller::PatientsController;

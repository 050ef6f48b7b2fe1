use super::CreatePatientCommand;
use crate::domain::{NewPatient, Patient};
use crate::error::PatientResult;
use crate::infrastructure::repositories::PatientRepository;
use std::sync::Arc;

/// Builds a patient record from a [`CreatePatientCommand`] and hands it to the repository.
#[derive(Clone)]
pub struct CreatePatientHandler {
    patient_repository: Arc<dyn PatientRepository>,
}

impl CreatePatientHandler {
    pub fn new(patient_repository: Arc<dyn PatientRepository>) -> Self {
        Self { patient_repository }
    }

    pub async fn handle(&self, command: CreatePatientCommand) -> PatientResult<Patient> {
        let patient = NewPatient {
            first_name: command.first_name,
            last_name: command.last_name,
            date_of_birth: command.date_of_birth,
            email: command.email,
            phone_number: command.phone_number,
            address: command.address,
        };

        self.patient_repository.add(patient).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatientError;
    use crate::infrastructure::repositories::InMemoryPatientRepository;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    fn command() -> CreatePatientCommand {
        CreatePatientCommand {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
            email: "ada@example.com".into(),
            phone_number: "555-0100".into(),
            address: "12 St James's Square".into(),
        }
    }

    #[tokio::test]
    async fn handle_copies_every_field() {
        let repo = Arc::new(InMemoryPatientRepository::new());
        let handler = CreatePatientHandler::new(repo.clone());

        let patient = handler.handle(command()).await.unwrap();
        let cmd = command();
        assert_eq!(patient.first_name, cmd.first_name);
        assert_eq!(patient.last_name, cmd.last_name);
        assert_eq!(patient.date_of_birth, cmd.date_of_birth);
        assert_eq!(patient.email, cmd.email);
        assert_eq!(patient.phone_number, cmd.phone_number);
        assert_eq!(patient.address, cmd.address);
        assert_eq!(repo.list().await.unwrap(), vec![patient]);
    }

    #[tokio::test]
    async fn empty_strings_pass_through_unvalidated() {
        let handler = CreatePatientHandler::new(Arc::new(InMemoryPatientRepository::new()));
        let cmd = CreatePatientCommand {
            first_name: String::new(),
            email: String::new(),
            ..command()
        };

        let patient = handler.handle(cmd).await.unwrap();
        assert_eq!(patient.first_name, "");
        assert_eq!(patient.email, "");
    }

    struct UnavailableRepository;

    #[async_trait]
    impl PatientRepository for UnavailableRepository {
        async fn add(&self, _patient: NewPatient) -> PatientResult<Patient> {
            Err(PatientError::Storage("offline".into()))
        }

        async fn list(&self) -> PatientResult<Vec<Patient>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let handler = CreatePatientHandler::new(Arc::new(UnavailableRepository));
        let err = handler.handle(command()).await.unwrap_err();
        assert!(matches!(err, PatientError::Storage(_)));
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("patient storage unavailable: {0}")]
    Storage(String),
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;

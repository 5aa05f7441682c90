use contracts::domain::a001_employee::{EmployeeNumber, ValidationErrors};
use thiserror::Error;

/// Reasons a registration request is rejected
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Error parsing JSON: {0}")]
    MalformedBody(String),

    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    #[error("Employee number {provided} does not match the expected {expected}")]
    EmployeeNumberMismatch {
        provided: EmployeeNumber,
        expected: EmployeeNumber,
    },
}

impl RegistrationError {
    /// Per-field messages, present only for validation failures
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

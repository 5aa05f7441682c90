pub mod aggregate;
pub mod employee_number;
pub mod validation;

pub use aggregate::{EmployeeId, EmployeeRecord, RegistrationRequest, RegistrationResponse};
pub use employee_number::EmployeeNumber;
pub use validation::{
    sanitize_id_number, validate, RegistrationField, RegistrationInput, ValidationErrors,
    ID_NUMBER_LENGTH,
};

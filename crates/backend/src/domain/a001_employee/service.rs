use super::{EmployeeRepository, RegistrationError};
use contracts::domain::a001_employee::{EmployeeRecord, RegistrationRequest};

/// Validate a registration request and store the resulting record
///
/// The employee number is always re-derived from the submitted surname and
/// ID number; a client-supplied value must agree with it.
pub async fn register(
    repo: &EmployeeRepository,
    dto: RegistrationRequest,
) -> Result<EmployeeRecord, RegistrationError> {
    let input = dto.to_input();

    let errors = input.validate();
    if !errors.is_empty() {
        tracing::warn!(%errors, "Registration rejected by validation");
        return Err(RegistrationError::Invalid(errors));
    }

    let expected = input.employee_number();
    match dto.employee_number {
        Some(provided) if provided != expected => {
            tracing::warn!(%provided, %expected, "Employee number mismatch");
            return Err(RegistrationError::EmployeeNumberMismatch { provided, expected });
        }
        _ => {}
    }

    let record = EmployeeRecord::new_for_insert(input, expected);
    let total = repo.insert(record.clone()).await;

    tracing::info!(
        id = %record.id.as_string(),
        name = %record.full_name(),
        employee_number = %record.employee_number,
        total_records = total,
        "New employee registered"
    );

    Ok(record)
}

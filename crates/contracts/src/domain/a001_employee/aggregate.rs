use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee_number::EmployeeNumber;
use super::validation::{RegistrationInput, ValidationErrors};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier assigned to a registered employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(EmployeeId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================

/// Registered employee as accepted by the registration endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,

    #[serde(rename = "firstName")]
    pub first_name: String,

    pub surname: String,

    #[serde(rename = "idNumber")]
    pub id_number: String,

    #[serde(rename = "employeeNumber")]
    pub employee_number: EmployeeNumber,

    #[serde(rename = "registeredAt")]
    pub registered_at: DateTime<Utc>,
}

impl EmployeeRecord {
    /// Build a record from already validated input
    pub fn new_for_insert(input: RegistrationInput, employee_number: EmployeeNumber) -> Self {
        Self {
            id: EmployeeId::new_v4(),
            first_name: input.first_name,
            surname: input.surname,
            id_number: input.id_number,
            employee_number,
            registered_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }
}

// ============================================================================
// Wire DTOs
// ============================================================================

/// Body of `POST /register`
///
/// Absent fields deserialize as empty strings so they surface as validation
/// errors. `lastName` is accepted in place of `surname`; when both are sent a
/// non-empty `surname` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RegistrationRequestBody")]
pub struct RegistrationRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,

    pub surname: String,

    #[serde(rename = "idNumber")]
    pub id_number: String,

    #[serde(rename = "employeeNumber", skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<EmployeeNumber>,
}

/// Incoming shape of [`RegistrationRequest`], with both surname spellings
#[derive(Deserialize)]
struct RegistrationRequestBody {
    #[serde(rename = "firstName", default)]
    first_name: String,

    #[serde(default)]
    surname: Option<String>,

    #[serde(rename = "lastName", default)]
    last_name: Option<String>,

    #[serde(rename = "idNumber", default)]
    id_number: String,

    #[serde(rename = "employeeNumber", default)]
    employee_number: Option<EmployeeNumber>,
}

impl From<RegistrationRequestBody> for RegistrationRequest {
    fn from(body: RegistrationRequestBody) -> Self {
        let surname = match (body.surname, body.last_name) {
            (Some(surname), _) if !surname.is_empty() => surname,
            (surname, last_name) => last_name.or(surname).unwrap_or_default(),
        };

        Self {
            first_name: body.first_name,
            surname,
            id_number: body.id_number,
            employee_number: body.employee_number,
        }
    }
}

impl RegistrationRequest {
    /// Snapshot the form input together with its derived employee number
    pub fn from_input(input: &RegistrationInput) -> Self {
        Self {
            first_name: input.first_name.clone(),
            surname: input.surname.clone(),
            id_number: input.id_number.clone(),
            employee_number: Some(input.employee_number()),
        }
    }

    pub fn to_input(&self) -> RegistrationInput {
        RegistrationInput::new(
            self.first_name.clone(),
            self.surname.clone(),
            self.id_number.clone(),
        )
    }
}

/// Body returned by `POST /register`, for success and failure alike
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl RegistrationResponse {
    pub fn registered(employee: EmployeeRecord) -> Self {
        Self {
            message: format!("Employee {} registered successfully!", employee.full_name()),
            employee: Some(employee),
            errors: None,
        }
    }
}

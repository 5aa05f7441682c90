use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::employee_number::EmployeeNumber;

/// Exact length of a national ID number
pub const ID_NUMBER_LENGTH: usize = 13;

/// Minimum surname length accepted by validation
pub const SURNAME_MIN_LEN: usize = 3;

/// Strip everything except ASCII digits and cap the result at
/// [`ID_NUMBER_LENGTH`] characters.
pub fn sanitize_id_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(ID_NUMBER_LENGTH)
        .collect()
}

fn is_valid_id_number(value: &str) -> bool {
    value.len() == ID_NUMBER_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Input
// ============================================================================

/// Values entered into the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    #[serde(rename = "firstName")]
    pub first_name: String,
    pub surname: String,
    #[serde(rename = "idNumber")]
    pub id_number: String,
}

impl RegistrationInput {
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        id_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            surname: surname.into(),
            id_number: id_number.into(),
        }
    }

    /// Employee number for the current values, empty while incomplete
    pub fn employee_number(&self) -> EmployeeNumber {
        EmployeeNumber::derive(&self.surname, &self.id_number)
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(self)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Form field an error message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegistrationField {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "surname")]
    Surname,
    #[serde(rename = "idNumber")]
    IdNumber,
}

impl RegistrationField {
    /// Name used on the wire and as the DOM element id
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Surname => "surname",
            Self::IdNumber => "idNumber",
        }
    }
}

/// Field-scoped validation messages, ordered by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<RegistrationField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: RegistrationField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: RegistrationField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegistrationField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, message) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Run every field rule and collect all failures
pub fn validate(input: &RegistrationInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if input.first_name.trim().is_empty() {
        errors.insert(RegistrationField::FirstName, "First name is required.");
    }

    if input.surname.is_empty() {
        errors.insert(RegistrationField::Surname, "Surname is required.");
    } else if input.surname.chars().count() < SURNAME_MIN_LEN {
        errors.insert(
            RegistrationField::Surname,
            "Surname must be at least 3 characters.",
        );
    }

    if input.id_number.is_empty() {
        errors.insert(RegistrationField::IdNumber, "ID number is required.");
    } else if !is_valid_id_number(&input.id_number) {
        errors.insert(
            RegistrationField::IdNumber,
            "Please enter a valid 13-digit ID number.",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        let input = RegistrationInput::new("Jane", "Doe", "9001015009087");
        assert!(validate(&input).is_empty());
        assert_eq!(input.employee_number().as_str(), "DOE9087");
    }

    #[test]
    fn test_every_rule_is_evaluated() {
        let errors = validate(&RegistrationInput::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(RegistrationField::FirstName),
            Some("First name is required.")
        );
        assert_eq!(
            errors.get(RegistrationField::Surname),
            Some("Surname is required.")
        );
        assert_eq!(
            errors.get(RegistrationField::IdNumber),
            Some("ID number is required.")
        );
    }

    #[test]
    fn test_whitespace_first_name_is_missing() {
        let errors = validate(&RegistrationInput::new("   ", "Doe", "9001015009087"));
        assert_eq!(
            errors.get(RegistrationField::FirstName),
            Some("First name is required.")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_short_surname() {
        let input = RegistrationInput::new("Wei", "Li", "1234567890123");
        let errors = validate(&input);
        assert_eq!(
            errors.get(RegistrationField::Surname),
            Some("Surname must be at least 3 characters.")
        );
        assert!(input.employee_number().is_empty());
    }

    #[test]
    fn test_surname_length_counts_entered_characters() {
        let blank = validate(&RegistrationInput::new("Jane", "   ", "9001015009087"));
        assert_eq!(blank.get(RegistrationField::Surname), None);

        let padded = validate(&RegistrationInput::new("Jane", "Li ", "9001015009087"));
        assert_eq!(padded.get(RegistrationField::Surname), None);

        let short = validate(&RegistrationInput::new("Jane", " L", "9001015009087"));
        assert_eq!(
            short.get(RegistrationField::Surname),
            Some("Surname must be at least 3 characters.")
        );
    }

    #[test]
    fn test_id_number_pattern() {
        for id in ["1234", "12345678901234", "123456789012a", "１２３４５６７８９０１２３"] {
            let errors = validate(&RegistrationInput::new("Jane", "Doe", id));
            assert_eq!(
                errors.get(RegistrationField::IdNumber),
                Some("Please enter a valid 13-digit ID number."),
                "id {id:?}"
            );
        }
    }

    #[test]
    fn test_id_number_error_independent_of_other_fields() {
        let errors = validate(&RegistrationInput::new("", "", "12"));
        assert_eq!(
            errors.get(RegistrationField::IdNumber),
            Some("Please enter a valid 13-digit ID number.")
        );
    }

    #[test]
    fn test_sanitize_id_number() {
        assert_eq!(sanitize_id_number("12AB34"), "1234");
        assert_eq!(sanitize_id_number("900101 5009 087"), "9001015009087");
        assert_eq!(sanitize_id_number("90010150090871234"), "9001015009087");
        assert_eq!(sanitize_id_number("-x-"), "");
    }

    #[test]
    fn test_sanitized_typing_scenario() {
        let input = RegistrationInput::new("Jane", "Doe", sanitize_id_number("12AB34"));
        assert_eq!(input.id_number, "1234");
        assert_eq!(
            validate(&input).get(RegistrationField::IdNumber),
            Some("Please enter a valid 13-digit ID number.")
        );
    }

    #[test]
    fn test_errors_serialize_by_wire_name() {
        let errors = validate(&RegistrationInput::new("Jane", "Li", "9001015009087"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "surname": "Surname must be at least 3 characters." })
        );
    }

    #[test]
    fn test_errors_display_in_field_order() {
        let errors = validate(&RegistrationInput::new("", "Li", "1"));
        assert_eq!(
            errors.to_string(),
            "First name is required. Surname must be at least 3 characters. \
             Please enter a valid 13-digit ID number."
        );
    }
}

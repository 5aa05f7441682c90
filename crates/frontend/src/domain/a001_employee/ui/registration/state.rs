use contracts::domain::a001_employee::{
    sanitize_id_number, EmployeeNumber, RegistrationInput, RegistrationRequest,
    RegistrationResponse, ValidationErrors,
};

use super::error::SubmitError;

/// Where the form is in the submit cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Request in flight; holds the payload that was sent
    Submitting(RegistrationRequest),
    Success(String),
    Failure(String),
}

/// Everything the form can react to
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FirstNameEdited(String),
    SurnameEdited(String),
    IdNumberEdited(String),
    SubmitRequested,
    ResponseReceived(Result<RegistrationResponse, SubmitError>),
    Dismissed,
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    None,
    Send(RegistrationRequest),
}

/// Registration form state: input, inline errors and submission phase
///
/// All changes go through [`RegistrationForm::handle`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    input: RegistrationInput,
    errors: ValidationErrors,
    phase: SubmissionPhase,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn employee_number(&self) -> EmployeeNumber {
        self.input.employee_number()
    }

    /// True while a request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting(_))
    }

    /// Outcome message waiting to be dismissed
    pub fn message(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Success(message) | SubmissionPhase::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Success(_))
    }

    pub fn handle(&mut self, event: FormEvent) -> FormEffect {
        match event {
            FormEvent::FirstNameEdited(value) if !self.is_busy() => {
                self.input.first_name = value;
            }
            FormEvent::SurnameEdited(value) if !self.is_busy() => {
                self.input.surname = value;
            }
            FormEvent::IdNumberEdited(value) if !self.is_busy() => {
                self.input.id_number = sanitize_id_number(&value);
            }
            FormEvent::SubmitRequested if self.phase == SubmissionPhase::Idle => {
                return self.submit();
            }
            FormEvent::ResponseReceived(outcome) if self.is_busy() => {
                if let SubmissionPhase::Submitting(request) = std::mem::take(&mut self.phase) {
                    self.complete(request, outcome);
                }
            }
            FormEvent::Dismissed if self.message().is_some() => {
                self.phase = SubmissionPhase::Idle;
            }
            _ => {}
        }
        FormEffect::None
    }

    fn submit(&mut self) -> FormEffect {
        self.errors = self.input.validate();
        if !self.errors.is_empty() {
            return FormEffect::None;
        }

        let request = RegistrationRequest::from_input(&self.input);
        self.phase = SubmissionPhase::Submitting(request.clone());
        FormEffect::Send(request)
    }

    fn complete(
        &mut self,
        request: RegistrationRequest,
        outcome: Result<RegistrationResponse, SubmitError>,
    ) {
        match outcome {
            Ok(response) => {
                let employee_number = response
                    .employee
                    .map(|e| e.employee_number)
                    .or(request.employee_number)
                    .unwrap_or_else(|| EmployeeNumber::derive(&request.surname, &request.id_number));
                self.phase = SubmissionPhase::Success(format!(
                    "Employee {} {} registered successfully! Employee number: {}",
                    request.first_name, request.surname, employee_number
                ));
                self.input.clear();
                self.errors = ValidationErrors::new();
            }
            Err(error) => {
                self.phase = SubmissionPhase::Failure(format!("Registration failed: {}", error));
            }
        }
    }
}

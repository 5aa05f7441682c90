use super::error::SubmitError;
use super::model;
use super::state::{FormEffect, FormEvent, RegistrationForm};
use contracts::domain::a001_employee::{RegistrationField, RegistrationRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the registration form
///
/// Holds the form state in a signal and performs the effects its
/// transitions ask for.
#[derive(Clone, Copy)]
pub struct RegistrationViewModel {
    pub form: RwSignal<RegistrationForm>,
}

impl RegistrationViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RegistrationForm::new()),
        }
    }

    pub fn dispatch(&self, event: FormEvent) {
        let effect = self
            .form
            .try_update(|form| form.handle(event))
            .unwrap_or(FormEffect::None);

        if let FormEffect::Send(request) = effect {
            self.send(request);
        }
    }

    fn send(&self, request: RegistrationRequest) {
        let form = self.form;
        log::info!(
            "Submitting registration for {} {}",
            request.first_name,
            request.surname
        );

        spawn_local(async move {
            let outcome = model::register(&request).await;
            match &outcome {
                Ok(response) => log::info!("Registration accepted: {}", response.message),
                Err(SubmitError::Network(detail)) => {
                    log::error!("Registration request failed: {}", detail)
                }
                Err(e) => log::warn!(
                    "Registration rejected (HTTP {}): {}",
                    e.status().unwrap_or_default(),
                    e
                ),
            }
            form.update(|f| {
                f.handle(FormEvent::ResponseReceived(outcome));
            });
        });
    }

    pub fn is_busy(&self) -> bool {
        self.form.with(|f| f.is_busy())
    }

    pub fn field_value(&self, field: RegistrationField) -> String {
        self.form.with(|f| {
            let input = f.input();
            match field {
                RegistrationField::FirstName => input.first_name.clone(),
                RegistrationField::Surname => input.surname.clone(),
                RegistrationField::IdNumber => input.id_number.clone(),
            }
        })
    }

    pub fn field_error(&self, field: RegistrationField) -> Option<String> {
        self.form.with(|f| f.errors().get(field).map(str::to_owned))
    }

    pub fn edit(&self, field: RegistrationField, value: String) {
        let event = match field {
            RegistrationField::FirstName => FormEvent::FirstNameEdited(value),
            RegistrationField::Surname => FormEvent::SurnameEdited(value),
            RegistrationField::IdNumber => FormEvent::IdNumberEdited(value),
        };
        self.dispatch(event);
    }
}

impl Default for RegistrationViewModel {
    fn default() -> Self {
        Self::new()
    }
}

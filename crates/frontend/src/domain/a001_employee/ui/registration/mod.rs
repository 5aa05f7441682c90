//! Employee Registration UI Module
//!
//! MVVM split, with the form logic kept free of Leptos:
//! - state.rs: form state object and its transition function
//! - error.rs: submission failures
//! - model.rs: API call (POST /register) and response interpretation
//! - view_model.rs: signal wrapper that executes effects
//! - view.rs: Leptos component (pure UI)

mod error;
mod model;
mod state;
mod view;
mod view_model;

pub use error::SubmitError;
pub use state::{FormEffect, FormEvent, RegistrationForm, SubmissionPhase};
pub use view::EmployeeRegistration;
pub use view_model::RegistrationViewModel;
